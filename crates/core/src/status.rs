//! Value-less outcome: a pure success/failure signal.

use serde::de::{Error as _, IgnoredAny};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::code::WellKnownCode;
use crate::error::{InvalidArgument, violated};
use crate::error_info::ErrorInfo;

/// Outcome of an operation that produces no value.
///
/// Exactly one of "succeeded" or "failed with an [`ErrorInfo`]" holds; the
/// enum makes the other two combinations unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "a Status may be a failure, which should be handled"]
pub enum Status {
    Success,
    Failure(ErrorInfo),
}

impl Status {
    pub fn success() -> Self {
        Status::Success
    }

    /// # Panics
    ///
    /// Panics if `error` carries the reserved `Success` code.
    #[track_caller]
    pub fn failure(error: ErrorInfo) -> Self {
        Self::try_failure(error).unwrap_or_else(|v| violated(v))
    }

    pub fn try_failure(error: ErrorInfo) -> Result<Self, InvalidArgument> {
        if error.is_reserved() {
            return Err(InvalidArgument::ReservedCode);
        }
        Ok(Status::Failure(error))
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
        Status::Failure(ErrorInfo::from_code(code, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Status::Success => None,
            Status::Failure(error) => Some(error),
        }
    }

    /// Invoke exactly one handler and return its result.
    pub fn branch<R>(
        self,
        on_success: impl FnOnce() -> R,
        on_failure: impl FnOnce(ErrorInfo) -> R,
    ) -> R {
        match self {
            Status::Success => on_success(),
            Status::Failure(error) => on_failure(error),
        }
    }

    /// Split into `(is_success, error)`.
    pub fn decompose(self) -> (bool, Option<ErrorInfo>) {
        match self {
            Status::Success => (true, None),
            Status::Failure(error) => (false, Some(error)),
        }
    }

    /// `"Success"` or `"Failure: <code>: <message>"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Status::Success => f.write_str("Success"),
            Status::Failure(error) => write!(f, "Failure: {error}"),
        }
    }
}

/// # Panics
///
/// Panics if `error` carries the reserved `Success` code.
impl From<ErrorInfo> for Status {
    #[track_caller]
    fn from(error: ErrorInfo) -> Self {
        Status::failure(error)
    }
}

impl<E: Into<ErrorInfo>> From<Result<(), E>> for Status {
    #[track_caller]
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Status::Success,
            Err(e) => Status::failure(e.into()),
        }
    }
}

impl From<Status> for Result<(), ErrorInfo> {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Ok(()),
            Status::Failure(error) => Err(error),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Status", 2)?;
        state.serialize_field("error", &self.error())?;
        state.serialize_field("isSuccess", &self.is_success())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusRepr {
    // Tolerated only as `null`; a value-less outcome has no payload.
    data: Option<IgnoredAny>,
    #[serde(default)]
    error: Option<ErrorInfo>,
    is_success: bool,
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = StatusRepr::deserialize(deserializer)?;
        match (repr.is_success, repr.data, repr.error) {
            (true, None, None) => Ok(Status::Success),
            (false, None, Some(error)) => Status::try_failure(error).map_err(D::Error::custom),
            (_, data, error) => Err(D::Error::custom(InvalidArgument::InconsistentParts {
                data_present: data.is_some(),
                error_present: error.is_some(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_error() {
        let s = Status::success();
        assert!(s.is_success());
        assert!(!s.is_failure());
        assert_eq!(s.error(), None);
        assert_eq!(s.describe(), "Success");
    }

    #[test]
    fn failure_carries_error() {
        let s = Status::failure(ErrorInfo::conflict("version 3 expected"));
        assert!(s.is_failure());
        assert_eq!(s.error().map(ErrorInfo::code), Some("Conflict"));
        assert_eq!(s.describe(), "Failure: Conflict: version 3 expected");
    }

    #[test]
    fn failure_with_builds_error_from_code() {
        let s = Status::failure_with(WellKnownCode::Unauthorized, "no access");
        assert_eq!(s.error(), Some(&ErrorInfo::unauthorized("no access")));
    }

    #[test]
    #[should_panic(expected = "reserved")]
    fn failure_with_success_code_panics() {
        let _ = Status::failure_with(WellKnownCode::Success, "not really");
    }

    #[test]
    fn try_failure_rejects_reserved_code() {
        let err = Status::try_failure(ErrorInfo::from_code(WellKnownCode::Success, "ok"));
        assert_eq!(err, Err(InvalidArgument::ReservedCode));
    }

    #[test]
    fn decompose_matches_queries() {
        assert_eq!(Status::success().decompose(), (true, None));

        let e = ErrorInfo::internal("disk full");
        assert_eq!(Status::failure(e.clone()).decompose(), (false, Some(e)));
    }

    #[test]
    fn branch_runs_one_handler() {
        let ok = Status::success().branch(|| "done", |_| "failed");
        assert_eq!(ok, "done");

        let failed = Status::from(ErrorInfo::not_found("gone"))
            .branch(String::new, |e| e.message().to_string());
        assert_eq!(failed, "gone");
    }

    #[test]
    fn converts_from_std_result() {
        let ok: Status = Ok::<(), ErrorInfo>(()).into();
        assert_eq!(ok, Status::Success);

        let failed: Status = Err::<(), _>(ErrorInfo::validation("bad")).into();
        assert_eq!(failed, Status::Failure(ErrorInfo::validation("bad")));

        let back: Result<(), ErrorInfo> = failed.into();
        assert_eq!(back, Err(ErrorInfo::validation("bad")));
    }

    #[test]
    fn serializes_flag_and_error() {
        let json = serde_json::to_string(&Status::success()).unwrap();
        assert_eq!(json, r#"{"error":null,"isSuccess":true}"#);

        let failed = Status::failure_with(WellKnownCode::NotFound, "x");
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(
            json,
            r#"{"error":{"code":"NotFound","message":"x"},"isSuccess":false}"#
        );
    }

    #[test]
    fn deserialization_enforces_invariant() {
        let ok: Status = serde_json::from_str(r#"{"isSuccess":true}"#).unwrap();
        assert_eq!(ok, Status::Success);

        let failed: Status = serde_json::from_str(
            r#"{"isSuccess":false,"error":{"code":"Conflict","message":"dup"}}"#,
        )
        .unwrap();
        assert_eq!(failed, Status::failure(ErrorInfo::conflict("dup")));

        assert!(serde_json::from_str::<Status>(r#"{"isSuccess":false,"error":null}"#).is_err());
        assert!(serde_json::from_str::<Status>(
            r#"{"isSuccess":true,"error":{"code":"Conflict","message":"dup"}}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Status>(
            r#"{"isSuccess":false,"error":{"code":"Success","message":"ok"}}"#
        )
        .is_err());
    }

    #[test]
    fn deserialization_rejects_payload() {
        let null_data: Status =
            serde_json::from_str(r#"{"data":null,"error":null,"isSuccess":true}"#).unwrap();
        assert_eq!(null_data, Status::Success);

        let err = serde_json::from_str::<Status>(r#"{"data":5,"error":null,"isSuccess":true}"#)
            .unwrap_err();
        assert!(err.to_string().contains("data present: true"), "{err}");
    }
}
