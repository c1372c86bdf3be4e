//! Server configuration read from the environment.

use std::net::{AddrParseError, SocketAddr};

use axum::http::StatusCode;
use thiserror::Error;

use crate::mapping::StatusMapping;

pub const ADDR_VAR: &str = "OUTCOME_HTTP_ADDR";
pub const FALLBACK_STATUS_VAR: &str = "OUTCOME_HTTP_FALLBACK_STATUS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid OUTCOME_HTTP_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid OUTCOME_HTTP_FALLBACK_STATUS {value:?}: expected a status in 100..=999")]
    InvalidStatus { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub bind_addr: SocketAddr,
    /// Status for error codes outside the well-known set.
    pub fallback_status: StatusCode,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            fallback_status: StatusCode::OK,
        }
    }
}

impl HttpConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
        }

        if let Some(value) = lookup(FALLBACK_STATUS_VAR) {
            config.fallback_status = value
                .trim()
                .parse::<u16>()
                .ok()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .ok_or(ConfigError::InvalidStatus { value })?;
        }

        Ok(config)
    }

    pub fn mapping(&self) -> StatusMapping {
        StatusMapping::with_fallback(self.fallback_status)
    }
}
