//! Tests for rendering internal failures.

use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::TraceId;

async fn render(error: &Error) -> (StatusCode, Value) {
    let response = error.error_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("response body to bytes");
    (status, serde_json::from_slice(&bytes).expect("json payload"))
}

#[rstest]
#[actix_web::test]
async fn renders_redacted_500_with_trace_id() {
    let id = TraceId::generate();
    let error = id
        .in_scope(async { Error::from(UserQueryError::unavailable("lock poisoned")) })
        .await;

    let (status, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": id.to_string()
        })
    );
}

#[rstest]
#[actix_web::test]
async fn query_errors_keep_their_cause_internally() {
    let error = Error::from(UserQueryError::unavailable("lock poisoned"));

    assert_eq!(error.message(), "user store unavailable: lock poisoned");
    let (_, body) = render(&error).await;
    assert!(!body.to_string().contains("lock poisoned"));
}
