//! Well-known failure codes.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of symbolic failure categories.
///
/// The variant name is the `code` string carried by an [`ErrorInfo`](crate::ErrorInfo)
/// built from it, which lets boundary layers map codes predictably.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellKnownCode {
    /// Reserved. Never valid for a failure.
    Success,
    NotFound,
    ValidationError,
    Unauthorized,
    Conflict,
    InternalError,
}

impl WellKnownCode {
    pub const ALL: [WellKnownCode; 6] = [
        WellKnownCode::Success,
        WellKnownCode::NotFound,
        WellKnownCode::ValidationError,
        WellKnownCode::Unauthorized,
        WellKnownCode::Conflict,
        WellKnownCode::InternalError,
    ];

    /// The code string, identical to the variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            WellKnownCode::Success => "Success",
            WellKnownCode::NotFound => "NotFound",
            WellKnownCode::ValidationError => "ValidationError",
            WellKnownCode::Unauthorized => "Unauthorized",
            WellKnownCode::Conflict => "Conflict",
            WellKnownCode::InternalError => "InternalError",
        }
    }

    pub const fn is_reserved(self) -> bool {
        matches!(self, WellKnownCode::Success)
    }
}

impl core::fmt::Display for WellKnownCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A code string outside the well-known set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown well-known code: {0}")]
pub struct UnknownCode(pub String);

impl FromStr for WellKnownCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WellKnownCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}
