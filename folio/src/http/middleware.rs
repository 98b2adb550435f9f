use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use folio_error::{folio_error, ErrorType};
use http::{header::CONTENT_TYPE, StatusCode};

/// Replaces the bare 408 and 413 responses produced by tower layers with JSON error bodies
pub async fn json_error_bodies(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if is_json {
        return response;
    }

    match response.status() {
        StatusCode::REQUEST_TIMEOUT => folio_error!(
            type = ErrorType::RequestTimeout,
            "request did not complete in time"
        )
        .into_response(),
        StatusCode::PAYLOAD_TOO_LARGE => folio_error!(
            type = ErrorType::PayloadTooLarge,
            "request body exceeded the configured limit"
        )
        .into_response(),
        _ => response,
    }
}
