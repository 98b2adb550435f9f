use super::MailTransport;
use crate::{
    error::{Error, Result},
    message::OutboundMessage,
};
use async_trait::async_trait;
use folio_config::email::{SmtpConfiguration, TlsMode};
use lettre::{
    message::MultiPart, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;

#[derive(Clone)]
pub struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    /// Build a pooled SMTP transport
    ///
    /// No connection is made until the first send or [`MailTransport::verify`].
    pub fn new(config: &SmtpConfiguration, timeout: Duration) -> Result<Self> {
        let builder = match config.tls_mode() {
            TlsMode::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
            TlsMode::Starttls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?,
            TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                config.host.as_str(),
            ),
        };

        let inner = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.to_string(),
                config.password.to_string(),
            ))
            .timeout(Some(timeout))
            .build();

        Ok(Self { inner })
    }

    pub fn message(message: &OutboundMessage) -> Result<Message> {
        let mut builder = Message::builder()
            .from(message.from.clone())
            .to(message.to.clone())
            .subject(message.subject.as_str());

        if let Some(reply_to) = message.reply_to_mailbox() {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(
            message.text.clone(),
            message.html.clone(),
        ))?)
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    #[instrument(skip_all)]
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let message = Self::message(message)?;
        let response = self.inner.send(message).await?;
        debug!(code = %response.code(), "SMTP server accepted the message");

        Ok(())
    }

    #[instrument(skip_all)]
    async fn verify(&self) -> Result<()> {
        if self.inner.test_connection().await? {
            Ok(())
        } else {
            Err(Error::SmtpUnreachable)
        }
    }
}

#[cfg(test)]
mod test {
    use super::SmtpTransport;
    use crate::{
        message::OutboundMessage,
        submission::{ContactSubmission, RawSubmission},
    };
    use folio_config::email::SmtpConfiguration;
    use std::time::Duration;

    fn outbound(email: &str) -> OutboundMessage {
        let submission = ContactSubmission::validate(RawSubmission {
            name: Some("Jane".into()),
            email: Some(email.into()),
            message: Some("Hi".into()),
        })
        .unwrap();

        OutboundMessage::compose(
            &submission,
            &"\"Portfolio Contact\" <mailer@example.com>".parse().unwrap(),
            &"owner@example.com".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn message_headers() {
        let message = SmtpTransport::message(&outbound("jane@x.com")).unwrap();
        let headers = message.headers().to_string();

        assert!(headers.contains("Reply-To: jane@x.com"));
        assert!(headers.contains("To: owner@example.com"));
        assert!(headers.contains("Subject: New Contact Form Submission from Jane (jane@x.com)"));
    }

    #[test]
    fn message_without_valid_reply_to() {
        let message = SmtpTransport::message(&outbound("jane at x dot com")).unwrap();
        assert!(!message.headers().to_string().contains("Reply-To"));
    }

    #[tokio::test]
    async fn builds_for_every_tls_mode() {
        for (port, tls) in [(465, None), (587, None), (1025, Some("none".parse().unwrap()))] {
            let config = SmtpConfiguration {
                host: "localhost".into(),
                port,
                tls,
                username: "user".into(),
                password: "pass".into(),
            };

            assert!(SmtpTransport::new(&config, Duration::from_secs(1)).is_ok());
        }
    }
}
