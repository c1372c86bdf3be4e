//! Failure reason value object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::code::WellKnownCode;
use crate::error::{InvalidArgument, violated};

/// Why an operation failed: a stable machine-readable `code` plus a
/// human-readable `message`.
///
/// Immutable once built; clone it freely to share between consumers.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{code}: {message}")]
#[serde(try_from = "RawErrorInfo")]
pub struct ErrorInfo {
    code: String,
    message: String,
}

impl ErrorInfo {
    /// Build from raw strings.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty or whitespace only. Use [`ErrorInfo::try_new`]
    /// to get the violation back as a value.
    #[track_caller]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::try_new(code, message).unwrap_or_else(|v| violated(v))
    }

    /// Build from raw strings, rejecting an empty message.
    ///
    /// The code is taken as given.
    pub fn try_new(
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(InvalidArgument::EmptyMessage);
        }
        Ok(Self {
            code: code.into(),
            message,
        })
    }

    /// Build from a well-known code; the variant name becomes the code string.
    ///
    /// # Panics
    ///
    /// Panics if `message` is empty or whitespace only.
    #[track_caller]
    pub fn from_code(code: WellKnownCode, message: impl Into<String>) -> Self {
        Self::new(code.as_str(), message)
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_code(WellKnownCode::NotFound, message)
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(WellKnownCode::ValidationError, message)
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_code(WellKnownCode::Unauthorized, message)
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::from_code(WellKnownCode::Conflict, message)
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::from_code(WellKnownCode::InternalError, message)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The well-known code this error carries, if its code is one.
    pub fn well_known(&self) -> Option<WellKnownCode> {
        self.code.parse().ok()
    }

    /// `true` when the code is the reserved `Success` code, which no failure
    /// may carry.
    pub fn is_reserved(&self) -> bool {
        self.code == WellKnownCode::Success.as_str()
    }

    /// `"<code>: <message>"`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

#[derive(Deserialize)]
struct RawErrorInfo {
    code: String,
    message: String,
}

impl TryFrom<RawErrorInfo> for ErrorInfo {
    type Error = InvalidArgument;

    fn try_from(raw: RawErrorInfo) -> Result<Self, Self::Error> {
        ErrorInfo::try_new(raw.code, raw.message)
    }
}
