//! Contract violations raised by the outcome constructors.
//!
//! These are programming errors, not domain failures: a domain failure travels
//! inside an [`Outcome`](crate::Outcome) as an [`ErrorInfo`](crate::ErrorInfo),
//! while an `InvalidArgument` means a caller broke a constructor precondition.

use thiserror::Error;

/// A constructor precondition was violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The error message was empty or whitespace only.
    #[error("error message must not be empty")]
    EmptyMessage,

    /// A failure was built with the reserved `Success` code.
    #[error("the `Success` code is reserved and cannot describe a failure")]
    ReservedCode,

    /// Data and error were both present, or both absent.
    #[error(
        "an outcome carries exactly one of data or error \
         (data present: {data_present}, error present: {error_present})"
    )]
    InconsistentParts {
        data_present: bool,
        error_present: bool,
    },
}

/// Fail-fast path for the panicking constructors.
#[cold]
#[track_caller]
pub(crate) fn violated(violation: InvalidArgument) -> ! {
    tracing::error!(%violation, "outcome contract violated");
    panic!("invalid argument: {violation}");
}
