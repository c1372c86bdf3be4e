//! Tracing and logging setup shared by the outcome binaries.

pub mod tracing;

pub use self::tracing::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), ConfigError> {
    let config = ObservabilityConfig::from_env()?;
    self::tracing::init(&config);
    Ok(())
}
