use crate::{Error, ErrorType, GENERIC_SERVER_ERROR};
use axum_core::response::{IntoResponse, Response};
use http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use serde::Serialize;

#[derive(Serialize)]
struct ClientErrorBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct ServerErrorBody<'a> {
    success: bool,
    error: &'a str,
}

#[inline]
fn to_response<B>(status_code: StatusCode, body: &B) -> Response
where
    B: Serialize,
{
    match sonic_rs::to_string(body) {
        Ok(body) => (
            status_code,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response(),
        Err(error) => {
            error!(?error, "failed to serialise error body");
            status_code.into_response()
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.ty {
            ErrorType::BadRequest(maybe_body) => {
                debug!(error = ?self.inner);

                let error = maybe_body.as_deref().unwrap_or("Bad Request");
                to_response(StatusCode::BAD_REQUEST, &ClientErrorBody { error })
            }
            ErrorType::MethodNotAllowed => {
                debug!(error = ?self.inner);

                to_response(
                    StatusCode::METHOD_NOT_ALLOWED,
                    &ClientErrorBody {
                        error: "Method Not Allowed",
                    },
                )
            }
            ErrorType::PayloadTooLarge => {
                debug!(error = ?self.inner);

                to_response(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    &ClientErrorBody {
                        error: "Request body too large.",
                    },
                )
            }
            ErrorType::RequestTimeout => {
                warn!(error = ?self.inner);

                to_response(
                    StatusCode::REQUEST_TIMEOUT,
                    &ClientErrorBody {
                        error: "Request timed out.",
                    },
                )
            }
            ErrorType::Other(maybe_body) => {
                error!(error = ?self.inner, "request failed");

                let error = maybe_body.as_deref().unwrap_or(GENERIC_SERVER_ERROR);
                to_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &ServerErrorBody {
                        success: false,
                        error,
                    },
                )
            }
        }
    }
}
