use bytes::Bytes;
use folio_email::{lettre::message::Mailbox, ContactService, MailTransport};
use http::{header::CONTENT_TYPE, StatusCode};
use http_body_util::Full;

pub use self::{logs::CapturedLogs, transport::RecordingTransport};

mod logs;
mod macros;
mod transport;

pub const FROM_ADDRESS: &str = "\"Portfolio Contact\" <mailer@example.com>";
pub const TO_ADDRESS: &str = "owner@example.com";

/// JSON response as returned by a mail provider's web API
pub fn build_json_response<B>(status: StatusCode, body: B) -> http::Response<Full<Bytes>>
where
    Bytes: From<B>,
{
    http::Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(body.into()))
        .unwrap()
}

/// Contact service with the test mailboxes wired up
#[must_use]
pub fn contact_service<T>(transport: T) -> ContactService<T>
where
    T: MailTransport,
{
    ContactService::builder()
        .transport(transport)
        .from_mailbox(FROM_ADDRESS.parse::<Mailbox>().unwrap())
        .to_mailbox(TO_ADDRESS.parse::<Mailbox>().unwrap())
        .build()
}
