//! Well-known code → HTTP status mapping.
//!
//! A pure function of the error's `code`; it never touches the outcome itself.

use axum::http::StatusCode;
use outcome_core::{Outcome, Status, WellKnownCode};

/// Status for a well-known code.
pub fn status_for(code: WellKnownCode) -> StatusCode {
    match code {
        WellKnownCode::Success => StatusCode::OK,
        WellKnownCode::NotFound => StatusCode::NOT_FOUND,
        WellKnownCode::ValidationError => StatusCode::BAD_REQUEST,
        WellKnownCode::Unauthorized => StatusCode::FORBIDDEN,
        WellKnownCode::Conflict => StatusCode::CONFLICT,
        WellKnownCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Code → status mapping with a fallback for codes outside the well-known set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatusMapping {
    fallback: StatusCode,
}

impl Default for StatusMapping {
    /// Unrecognized codes pass through as `200 OK`.
    fn default() -> Self {
        Self {
            fallback: StatusCode::OK,
        }
    }
}

impl StatusMapping {
    pub fn with_fallback(fallback: StatusCode) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> StatusCode {
        self.fallback
    }

    pub fn for_code(&self, code: &str) -> StatusCode {
        match code.parse::<WellKnownCode>() {
            Ok(known) => status_for(known),
            Err(_) => {
                tracing::debug!(code, fallback = %self.fallback, "unrecognized error code");
                self.fallback
            }
        }
    }

    pub fn for_status(&self, status: &Status) -> StatusCode {
        status
            .error()
            .map_or(StatusCode::OK, |error| self.for_code(error.code()))
    }

    pub fn for_outcome<T>(&self, outcome: &Outcome<T>) -> StatusCode {
        outcome
            .error()
            .map_or(StatusCode::OK, |error| self.for_code(error.code()))
    }
}
