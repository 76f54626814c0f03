//! Success/failure envelope returned by application services.
//!
//! [`Outcome`] is what inbound adapters serialise verbatim. It keeps the
//! payload and the failure description mutually exclusive: a payload is
//! present exactly when the outcome is a success.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{Error, ErrorCode};

/// Message attached to successes unless a custom one is supplied.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "OK";

/// Message used when converting a failure that carries none.
const FALLBACK_FAILURE_MESSAGE: &str = "request failed";

/// Application-level result envelope.
///
/// # Examples
/// ```
/// use eventshop::domain::{ErrorCode, Outcome};
///
/// let ok = Outcome::success(7);
/// assert!(ok.is_success());
/// assert_eq!(ok.data(), Some(&7));
///
/// let failed: Outcome<i32> = Outcome::failure("no such event", Some(ErrorCode::NotFound), Vec::new());
/// assert!(!failed.is_success());
/// assert!(failed.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<T> {
    is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

/// Reasons a serialised envelope is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeValidationError {
    #[error("successful outcome must carry data")]
    MissingData,
    #[error("failed outcome must not carry data")]
    UnexpectedData,
    #[error("successful outcome must not carry an error code")]
    UnexpectedErrorCode,
}

impl<T> Outcome<T> {
    /// Successful outcome with the default `"OK"` message.
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, DEFAULT_SUCCESS_MESSAGE)
    }

    /// Successful outcome with a custom message.
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: Some(message.into()),
            error_code: None,
            errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Failed outcome without a payload.
    pub fn failure(
        message: impl Into<String>,
        error_code: Option<ErrorCode>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            is_success: false,
            message: Some(message.into()),
            error_code,
            errors,
            data: None,
        }
    }

    /// Failed outcome describing a domain error.
    ///
    /// Field-level messages stored under `details.errors` are copied into
    /// [`Outcome::errors`].
    pub fn from_error(error: &Error) -> Self {
        Self::failure(
            error.message(),
            Some(error.code()),
            error.detail_messages(),
        )
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error_code
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the outcome, returning the payload of a success.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Convert into a standard [`Result`].
    ///
    /// Failures become an [`Error`] with the envelope's code (internal when
    /// absent) and its error list under `details.errors`.
    pub fn into_result(self) -> Result<T, Error> {
        match self.data {
            Some(data) if self.is_success => Ok(data),
            _ => {
                let code = self.error_code.unwrap_or(ErrorCode::InternalError);
                let message = self
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_owned());
                let error = Error::new(code, message);
                if self.errors.is_empty() {
                    Err(error)
                } else {
                    Err(error.with_details(serde_json::json!({ "errors": self.errors })))
                }
            }
        }
    }

    /// Transform the payload of a success, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            is_success: self.is_success,
            message: self.message,
            error_code: self.error_code,
            errors: self.errors,
            data: self.data.map(f),
        }
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(value: Result<T, Error>) -> Self {
        match value {
            Ok(data) => Self::success(data),
            Err(error) => Self::from_error(&error),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct OutcomeDto<T> {
    is_success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_code: Option<ErrorCode>,
    #[serde(default)]
    errors: Vec<String>,
    // A present `data` key always counts as a payload, so unit payloads
    // serialised as `null` survive a round trip.
    #[serde(default, deserialize_with = "deserialize_present")]
    data: Option<T>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> TryFrom<OutcomeDto<T>> for Outcome<T> {
    type Error = OutcomeValidationError;

    fn try_from(dto: OutcomeDto<T>) -> Result<Self, Self::Error> {
        match (dto.is_success, dto.data.is_some()) {
            (true, false) => return Err(OutcomeValidationError::MissingData),
            (false, true) => return Err(OutcomeValidationError::UnexpectedData),
            _ => {}
        }
        if dto.is_success && dto.error_code.is_some() {
            return Err(OutcomeValidationError::UnexpectedErrorCode);
        }
        Ok(Self {
            is_success: dto.is_success,
            message: dto.message,
            error_code: dto.error_code,
            errors: dto.errors,
            data: dto.data,
        })
    }
}

impl<'de, T> Deserialize<'de> for Outcome<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        OutcomeDto::<T>::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn success_carries_data_and_default_message() {
        let outcome = Outcome::success(vec![1, 2]);
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), Some("OK"));
        assert_eq!(outcome.data(), Some(&vec![1, 2]));
        assert!(outcome.errors().is_empty());
        assert!(outcome.error_code().is_none());
    }

    #[rstest]
    fn failure_has_no_data() {
        let outcome: Outcome<String> = Outcome::failure(
            "invalid search",
            Some(ErrorCode::InvalidRequest),
            vec!["limit must be between 1 and 200".to_owned()],
        );
        assert!(!outcome.is_success());
        assert!(outcome.data().is_none());
        assert_eq!(outcome.error_code(), Some(ErrorCode::InvalidRequest));
        assert_eq!(outcome.errors().len(), 1);
    }

    #[rstest]
    fn from_error_copies_detail_messages() {
        let error = Error::invalid_request("invalid search")
            .with_details(json!({ "errors": ["from must not be after to"] }));
        let outcome: Outcome<()> = Outcome::from_error(&error);
        assert_eq!(outcome.message(), Some("invalid search"));
        assert_eq!(outcome.errors(), ["from must not be after to".to_owned()]);
    }

    #[rstest]
    fn into_result_round_trips_failures() {
        let outcome: Outcome<u8> = Outcome::failure(
            "tag exists",
            Some(ErrorCode::Conflict),
            vec!["name".to_owned()],
        );
        let error = outcome.into_result().expect_err("failure");
        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(error.message(), "tag exists");
        assert_eq!(error.detail_messages(), vec!["name".to_owned()]);
    }

    #[rstest]
    fn into_result_defaults_missing_code_to_internal() {
        let outcome: Outcome<u8> = Outcome::failure("boom", None, Vec::new());
        let error = outcome.into_result().expect_err("failure");
        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[rstest]
    fn map_transforms_only_successes() {
        assert_eq!(Outcome::success(2).map(|n| n * 10).into_data(), Some(20));
        let failed: Outcome<i32> = Outcome::failure("nope", None, Vec::new());
        assert!(failed.map(|n| n * 10).into_data().is_none());
    }

    #[rstest]
    fn serialises_camel_case_and_skips_absent_fields() {
        let value = serde_json::to_value(Outcome::success("Toronto")).expect("serialise");
        assert_eq!(
            value,
            json!({ "isSuccess": true, "message": "OK", "errors": [], "data": "Toronto" })
        );

        let failed: Outcome<String> =
            Outcome::failure("missing", Some(ErrorCode::NotFound), Vec::new());
        let value = serde_json::to_value(failed).expect("serialise");
        assert_eq!(
            value,
            json!({ "isSuccess": false, "message": "missing", "errorCode": "not_found", "errors": [] })
        );
    }

    #[rstest]
    fn unit_payload_round_trips() {
        let encoded = serde_json::to_string(&Outcome::success(())).expect("serialise");
        let decoded: Outcome<()> = serde_json::from_str(&encoded).expect("deserialise");
        assert!(decoded.is_success());
        assert_eq!(decoded.data(), Some(&()));
    }

    #[rstest]
    #[case(json!({ "isSuccess": true }), "must carry data")]
    #[case(json!({ "isSuccess": false, "data": 3 }), "must not carry data")]
    #[case(json!({ "isSuccess": true, "errorCode": "conflict", "data": 3 }), "error code")]
    fn rejects_envelopes_breaking_the_payload_rule(
        #[case] payload: serde_json::Value,
        #[case] expected: &str,
    ) {
        let err = serde_json::from_value::<Outcome<i32>>(payload).expect_err("invalid envelope");
        assert!(err.to_string().contains(expected), "unexpected error: {err}");
    }
}
