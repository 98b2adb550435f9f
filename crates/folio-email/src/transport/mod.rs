use crate::{error::Result, message::OutboundMessage};
use async_trait::async_trait;
use enum_dispatch::enum_dispatch;

pub mod sendgrid;
pub mod smtp;

pub use self::{sendgrid::SendgridTransport, smtp::SmtpTransport};

/// Outbound channel for rendered messages
#[async_trait]
#[enum_dispatch]
pub trait MailTransport: Clone + Send + Sync + 'static {
    /// Hand the message over to the provider
    async fn send(&self, message: &OutboundMessage) -> Result<()>;

    /// Check that the provider is reachable and accepts our credentials
    async fn verify(&self) -> Result<()>;
}

#[derive(Clone)]
#[enum_dispatch(MailTransport)]
pub enum AnyTransport {
    Smtp(SmtpTransport),
    Sendgrid(SendgridTransport),
}
