//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn conflict_with_details() -> Error {
    Error::conflict("streak changed concurrently").with_details(json!({
        "expectedRevision": 2,
        "actualRevision": 3,
    }))
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::conflict("raced"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_substitutes_placeholder_for_blank_messages() {
    let error = Error::new(ErrorCode::InternalError, "");
    assert_eq!(error.message(), "unspecified error");
}

#[rstest]
fn serialises_code_in_snake_case(conflict_with_details: Error) {
    let value = serde_json::to_value(&conflict_with_details).expect("serialise error");
    assert_eq!(value["code"], "conflict");
    assert_eq!(value["message"], "streak changed concurrently");
    assert_eq!(value["details"]["actualRevision"], 3);
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let payload = json!({ "code": "not_found", "message": " " });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err(), "blank message must fail validation");
}

#[rstest]
fn round_trips_through_json(conflict_with_details: Error) {
    let value = serde_json::to_value(&conflict_with_details).expect("serialise error");
    let decoded: Error = serde_json::from_value(value).expect("deserialise error");
    assert_eq!(decoded, conflict_with_details);
}
