//! Tests for domain error construction, trace capture and serialisation.

use super::*;
use crate::domain::TraceId;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = Error::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_codes(#[case] error: Error, #[case] code: ErrorCode) {
    assert_eq!(error.code(), code);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values() {
    let result = Error::invalid_request("bad").try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::not_found("missing")).expect("serialise error");
    assert_eq!(value, json!({"code": "not_found", "message": "missing"}));
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let result: Result<Error, _> =
        serde_json::from_value(json!({"code": "conflict", "message": " "}));
    assert!(result.is_err());
}

#[rstest]
fn deserialisation_accepts_snake_case_trace_id(expected_trace_id: String) {
    let error: Error = serde_json::from_value(json!({
        "code": "internal_error",
        "message": "boom",
        "trace_id": expected_trace_id,
    }))
    .expect("deserialise error");
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn detail_messages_reads_error_list() {
    let error = Error::invalid_request("invalid search")
        .with_details(json!({"errors": ["from must not be after to", 42, "limit too large"]}));
    assert_eq!(
        error.detail_messages(),
        vec![
            "from must not be after to".to_owned(),
            "limit too large".to_owned()
        ]
    );
}

#[rstest]
fn detail_messages_is_empty_without_details() {
    assert!(Error::not_found("missing").detail_messages().is_empty());
}

#[rstest]
fn error_code_display_matches_wire_format() {
    assert_eq!(ErrorCode::ServiceUnavailable.to_string(), "service_unavailable");
    let wire = serde_json::to_value(ErrorCode::ServiceUnavailable).expect("serialise code");
    assert_eq!(wire, json!("service_unavailable"));
}
