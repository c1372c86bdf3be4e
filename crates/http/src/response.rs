//! axum response adapter for outcomes.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use outcome_core::{Outcome, Status};

use crate::mapping::StatusMapping;

/// Responds with the outcome's wire shape and the status its error code maps to.
///
/// ```ignore
/// async fn get_item(Path(id): Path<u64>) -> Reply<Item> {
///     catalog.get(id).into()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Reply<T> {
    outcome: Outcome<T>,
    mapping: StatusMapping,
}

impl<T> Reply<T> {
    pub fn new(outcome: Outcome<T>) -> Self {
        Self {
            outcome,
            mapping: StatusMapping::default(),
        }
    }

    pub fn with_mapping(mut self, mapping: StatusMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }
}

impl<T> From<Outcome<T>> for Reply<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self::new(outcome)
    }
}

impl From<Status> for Reply<()> {
    fn from(status: Status) -> Self {
        Self::new(status.into())
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let status = self.mapping.for_outcome(&self.outcome);

        if let Some(error) = self.outcome.error() {
            if status.is_server_error() {
                tracing::error!(
                    code = error.code(),
                    message = error.message(),
                    %status,
                    "request failed"
                );
            } else {
                tracing::debug!(code = error.code(), %status, "request rejected");
            }
        }

        (status, Json(self.outcome)).into_response()
    }
}
