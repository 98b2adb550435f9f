use http::StatusCode;
use std::error::Error as StdError;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync>;
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),

    #[error("provider responded with {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error(transparent)]
    Http(#[from] http::Error),

    #[error(transparent)]
    HttpClient(#[from] folio_http_client::Error),

    #[error(transparent)]
    Json(#[from] sonic_rs::Error),

    #[error(transparent)]
    Lettre(#[from] lettre::error::Error),

    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("SMTP server did not accept the connection test")]
    SmtpUnreachable,

    #[error(transparent)]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Templating(#[from] askama::Error),

    #[error("transport did not finish within {0:?}")]
    Timeout(std::time::Duration),

    #[error(transparent)]
    Transport(BoxError),
}
