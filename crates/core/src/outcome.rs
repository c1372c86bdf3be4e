//! Value-bearing outcome.
//!
//! `Outcome<T>` is what a service hands back to its caller: either the value it
//! produced or the [`ErrorInfo`] explaining why it could not. The caller must
//! look at it (`is_success`, [`Outcome::branch`], [`Outcome::decompose`]) before
//! reaching the payload; nothing unwraps it implicitly.
//!
//! ```
//! use outcome_core::{Outcome, WellKnownCode};
//!
//! fn find(id: u32) -> Outcome<String> {
//!     if id == 7 {
//!         return Outcome::failure_with(WellKnownCode::NotFound, format!("Item {id} not found"));
//!     }
//!     Outcome::success(format!("item-{id}"))
//! }
//!
//! let label = find(1).branch(|name| name, |error| error.to_string());
//! assert_eq!(label, "item-1");
//! assert_eq!(find(7).describe(), "Failure: NotFound: Item 7 not found");
//! ```

use serde::de::Error as _;
use serde::de::value::UnitDeserializer;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::code::WellKnownCode;
use crate::error::{InvalidArgument, violated};
use crate::error_info::ErrorInfo;
use crate::status::Status;

/// Outcome of an operation that produces a `T` on success.
///
/// An operation that legitimately has nothing to return on success uses
/// `Outcome<()>` (or [`Status`]); one whose result may be empty uses
/// `Outcome<Option<T>>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an Outcome may be a failure, which should be handled"]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Outcome::Success(data)
    }

    /// Lift a bare value into a successful outcome. Same as [`Outcome::success`].
    pub fn from_value(data: T) -> Self {
        Outcome::Success(data)
    }

    /// # Panics
    ///
    /// Panics if `error` carries the reserved `Success` code.
    #[track_caller]
    pub fn failure(error: ErrorInfo) -> Self {
        Self::try_failure(error).unwrap_or_else(|v| violated(v))
    }

    /// Lift a bare error into a failed outcome. Same as [`Outcome::failure`].
    ///
    /// # Panics
    ///
    /// Panics if `error` carries the reserved `Success` code.
    #[track_caller]
    pub fn from_error(error: ErrorInfo) -> Self {
        Self::failure(error)
    }

    pub fn try_failure(error: ErrorInfo) -> Result<Self, InvalidArgument> {
        if error.is_reserved() {
            return Err(InvalidArgument::ReservedCode);
        }
        Ok(Outcome::Failure(error))
    }

    /// Build a failure from a well-known code.
    ///
    /// # Panics
    ///
    /// Panics if `code` is [`WellKnownCode::Success`] or `message` is blank.
    #[track_caller]
    pub fn failure_with(code: WellKnownCode, message: impl Into<String>) -> Self {
        if code.is_reserved() {
            violated(InvalidArgument::ReservedCode);
        }
        Outcome::Failure(ErrorInfo::from_code(code, message))
    }

    /// Build from two optional parts, as held by a record with nullable
    /// `data` and `error` fields.
    ///
    /// Exactly one part must be present.
    pub fn from_parts(data: Option<T>, error: Option<ErrorInfo>) -> Result<Self, InvalidArgument> {
        match (data, error) {
            (Some(data), None) => Ok(Outcome::Success(data)),
            (None, Some(error)) => Self::try_failure(error),
            (data, error) => Err(InvalidArgument::InconsistentParts {
                data_present: data.is_some(),
                error_present: error.is_some(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Invoke `on_success` with the payload or `on_failure` with the error,
    /// whichever applies, and return what it returns.
    ///
    /// Exactly one handler runs, synchronously, on the caller's stack. A
    /// handler may return a future; awaiting it is the caller's business.
    pub fn branch<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(ErrorInfo) -> R,
    ) -> R {
        match self {
            Outcome::Success(data) => on_success(data),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Split into `(is_success, data, error)`.
    pub fn decompose(self) -> (bool, Option<T>, Option<ErrorInfo>) {
        match self {
            Outcome::Success(data) => (true, Some(data), None),
            Outcome::Failure(error) => (false, None, Some(error)),
        }
    }

    /// The value-less view of this outcome.
    pub fn status(&self) -> Status {
        match self {
            Outcome::Success(_) => Status::Success,
            Outcome::Failure(error) => Status::Failure(error.clone()),
        }
    }

    /// Drop the payload, keeping success or the error.
    pub fn into_status(self) -> Status {
        match self {
            Outcome::Success(_) => Status::Success,
            Outcome::Failure(error) => Status::Failure(error),
        }
    }

    /// Hand over to `?`-based code.
    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T: core::fmt::Display> Outcome<T> {
    /// `"Success: <data>"` or `"Failure: <code>: <message>"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Success(data) => write!(f, "Success: {data}"),
            Outcome::Failure(error) => write!(f, "Failure: {error}"),
        }
    }
}

/// # Panics
///
/// Panics if `error` carries the reserved `Success` code.
impl<T> From<ErrorInfo> for Outcome<T> {
    #[track_caller]
    fn from(error: ErrorInfo) -> Self {
        Outcome::failure(error)
    }
}

impl<T, E: Into<ErrorInfo>> From<Result<T, E>> for Outcome<T> {
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(e) => Outcome::failure(e.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorInfo> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl From<Status> for Outcome<()> {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Outcome::Success(()),
            Status::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Status {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_status()
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("error", &self.error())?;
        state.serialize_field("isSuccess", &self.is_success())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeRepr<T> {
    data: Option<T>,
    #[serde(default)]
    error: Option<ErrorInfo>,
    is_success: bool,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = OutcomeRepr::<T>::deserialize(deserializer)?;

        match (repr.is_success, repr.data, repr.error) {
            (true, Some(data), None) => Ok(Outcome::Success(data)),
            // A null or missing payload is a success only for types that
            // accept unit, such as `()` and `Option<_>`.
            (true, None, None) => T::deserialize(UnitDeserializer::<D::Error>::new())
                .map(Outcome::Success),
            (false, None, Some(error)) => Outcome::try_failure(error).map_err(D::Error::custom),
            (_, data, error) => Err(D::Error::custom(InvalidArgument::InconsistentParts {
                data_present: data.is_some(),
                error_present: error.is_some(),
            })),
        }
    }
}
