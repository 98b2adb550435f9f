use crate::http::extractor::{AgnosticForm, Json};
use axum::extract::State;
use folio_email::{ContactService, MailTransport, RawSubmission};
use folio_error::{folio_error, ErrorType, Result};
use http::Method;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Email sent successfully!";

#[derive(Serialize)]
pub struct Sent {
    success: bool,
    message: &'static str,
}

pub async fn post<T>(
    State(contact): State<ContactService<T>>,
    AgnosticForm(submission): AgnosticForm<RawSubmission>,
) -> Result<Json<Sent>>
where
    T: MailTransport,
{
    contact.submit(submission).await?;

    Ok(Json(Sent {
        success: true,
        message: SUCCESS_MESSAGE,
    }))
}

#[allow(clippy::unused_async)]
pub async fn method_not_allowed(method: Method) -> folio_error::Error {
    folio_error!(type = ErrorType::MethodNotAllowed, format!("{method} is not supported"))
}
