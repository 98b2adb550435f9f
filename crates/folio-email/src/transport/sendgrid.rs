use super::MailTransport;
use crate::{
    error::{Error, Result},
    message::OutboundMessage,
};
use async_trait::async_trait;
use folio_http_client::{Body, Client, Response};
use http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Request,
};
use lettre::message::Mailbox;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// SendGrid v3 web API
#[derive(Clone, TypedBuilder)]
pub struct SendgridTransport {
    #[builder(setter(into))]
    api_key: String,
    #[builder(setter(into))]
    api_url: String,

    #[builder(default)]
    client: Client,
}

#[derive(Serialize)]
struct Address<'a> {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> From<&'a Mailbox> for Address<'a> {
    fn from(value: &'a Mailbox) -> Self {
        Self {
            email: value.email.to_string(),
            name: value.name.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    ty: &'static str,
    value: &'a str,
}

#[derive(Serialize)]
struct MailSend<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    content: [Content<'a>; 2],
}

impl SendgridTransport {
    fn authorization(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url.trim_end_matches('/'))
    }

    async fn check(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Api { status, body })
    }
}

#[async_trait]
impl MailTransport for SendgridTransport {
    #[instrument(skip_all)]
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let reply_to = message.reply_to_mailbox();
        let payload = MailSend {
            personalizations: [Personalization {
                to: [Address::from(&message.to)],
            }],
            from: Address::from(&message.from),
            reply_to: reply_to.as_ref().map(Address::from),
            subject: &message.subject,
            content: [
                Content {
                    ty: "text/plain",
                    value: &message.text,
                },
                Content {
                    ty: "text/html",
                    value: &message.html,
                },
            ],
        };

        let request = Request::post(self.endpoint("/v3/mail/send"))
            .header(AUTHORIZATION, self.authorization())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::json(&payload)?)?;

        let response = self.client.execute(request).await?;
        Self::check(response).await
    }

    #[instrument(skip_all)]
    async fn verify(&self) -> Result<()> {
        let request = Request::get(self.endpoint("/v3/scopes"))
            .header(AUTHORIZATION, self.authorization())
            .header(ACCEPT, "application/json")
            .body(Body::empty())?;

        let response = self.client.execute(request).await?;
        Self::check(response).await
    }
}
