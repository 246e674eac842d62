//! Custom test assertions

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;

/// Assert a response carries `status` and the body `{"error": message}`
pub async fn assert_error_response<B: MessageBody>(
    resp: ServiceResponse<B>,
    status: StatusCode,
    message: &str,
) {
    assert_eq!(resp.status(), status, "unexpected status");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({ "error": message }),
        "unexpected error body"
    );
}
