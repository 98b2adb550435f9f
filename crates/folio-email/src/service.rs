use crate::{
    error::Error,
    message::OutboundMessage,
    submission::{ContactSubmission, RawSubmission},
    transport::{AnyTransport, MailTransport},
};
use folio_error::{ErrorType, Result, ResultExt};
use lettre::message::Mailbox;
use std::time::Duration;
use tokio::sync::OnceCell;
use triomphe::Arc;
use typed_builder::TypedBuilder;

/// Body returned to the visitor when the transport failed
pub const SEND_FAILURE: &str = "Failed to send email.";

const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Validate, format, send
#[derive(Clone, TypedBuilder)]
pub struct ContactService<T = AnyTransport> {
    transport: T,
    #[builder(setter(into))]
    from_mailbox: Arc<Mailbox>,
    #[builder(setter(into))]
    to_mailbox: Arc<Mailbox>,
    #[builder(default = DEFAULT_SEND_TIMEOUT)]
    send_timeout: Duration,
    #[builder(default, setter(skip))]
    verified: Arc<OnceCell<()>>,
}

impl<T> ContactService<T>
where
    T: MailTransport,
{
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the transport check right now and report the outcome
    pub async fn verify(&self) -> crate::Result<()> {
        self.transport.verify().await
    }

    /// Run the transport check, at most once over the lifetime of the service
    ///
    /// A failed check is logged and otherwise ignored. The send is attempted regardless.
    pub async fn ensure_verified(&self) {
        self.verified
            .get_or_init(|| async {
                match self.transport.verify().await {
                    Ok(()) => info!("mail transport verified"),
                    Err(error) => warn!(?error, "mail transport verification failed"),
                }
            })
            .await;
    }

    /// Relay a submission to the site owner
    ///
    /// The send runs on its own task. Dropping the returned future does not cancel a send
    /// that already started.
    #[instrument(skip_all)]
    pub async fn submit(&self, raw: RawSubmission) -> Result<()> {
        let submission = ContactSubmission::validate(raw).map_err(|error| {
            let body = error.to_string();
            folio_error::Error::new(ErrorType::BadRequest(Some(body)), error)
        })?;

        let message =
            OutboundMessage::compose(&submission, &self.from_mailbox, &self.to_mailbox)?;

        self.ensure_verified().await;

        let transport = self.transport.clone();
        let send_timeout = self.send_timeout;
        let handle = tokio::spawn(async move {
            tokio::time::timeout(send_timeout, transport.send(&message))
                .await
                .map_err(|_| Error::Timeout(send_timeout))?
        });

        let result = match handle.await {
            Ok(result) => result,
            Err(error) => Err(Error::from(error)),
        };

        result.with_error_type(ErrorType::Other(Some(SEND_FAILURE.into())))?;

        info!("contact message relayed");
        Ok(())
    }
}
