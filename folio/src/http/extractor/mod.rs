use axum::{
    body::Body,
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use folio_error::{Error, ErrorType};
use http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use mime::Mime;
use serde::de::DeserializeOwned;

pub use self::json::Json;

mod json;

pub const MALFORMED_BODY: &str = "Malformed request body.";

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Mime>().ok())
        .is_some_and(|content_type| {
            content_type.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED
        })
}

/// Body that is either JSON or an url-encoded form
///
/// Anything not explicitly marked as a form is decoded as JSON, whatever its content type says.
pub struct AgnosticForm<T>(pub T);

impl<S, T> FromRequest<S> for AgnosticForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let urlencoded = is_urlencoded(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            let ty = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ErrorType::PayloadTooLarge
            } else {
                ErrorType::BadRequest(Some(MALFORMED_BODY.into()))
            };

            Error::new(ty, rejection).into_response()
        })?;

        let content = if urlencoded {
            serde_urlencoded::from_bytes(&bytes).map_err(|error| {
                debug!(?error, "failed to parse form payload");
                Error::new(ErrorType::BadRequest(Some(MALFORMED_BODY.into())), error)
            })
        } else {
            sonic_rs::from_slice(&bytes).map_err(|error| {
                debug!(?error, "failed to parse JSON payload");
                Error::new(ErrorType::BadRequest(Some(MALFORMED_BODY.into())), error)
            })
        };

        content.map(Self).map_err(IntoResponse::into_response)
    }
}
