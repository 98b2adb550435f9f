use async_trait::async_trait;
use folio_email::{error::Error, MailTransport, OutboundMessage};
use parking_lot::Mutex;
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};
use triomphe::Arc;

#[derive(Default)]
struct Inner {
    sent: Mutex<Vec<OutboundMessage>>,
    attempts: AtomicUsize,
    verifications: AtomicUsize,
}

/// In-memory transport that records everything it is asked to deliver
#[derive(Clone, Default)]
pub struct RecordingTransport {
    inner: Arc<Inner>,
    failure: Option<&'static str>,
    verify_failure: Option<&'static str>,
    delay: Option<Duration>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails with the given reason, as an SMTP server rejecting our login would
    #[must_use]
    pub fn failing(reason: &'static str) -> Self {
        Self {
            failure: Some(reason),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_verify_failure(self, reason: &'static str) -> Self {
        Self {
            verify_failure: Some(reason),
            ..self
        }
    }

    /// Sleep for the given duration before completing a send
    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    /// Messages that were delivered successfully
    #[must_use]
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.inner.sent.lock().clone()
    }

    /// Number of sends attempted, failed ones included
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.inner.attempts.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn verifications(&self) -> usize {
        self.inner.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: &OutboundMessage) -> folio_email::Result<()> {
        self.inner.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(reason) = self.failure {
            return Err(Error::Transport(reason.into()));
        }

        self.inner.sent.lock().push(message.clone());
        Ok(())
    }

    async fn verify(&self) -> folio_email::Result<()> {
        self.inner.verifications.fetch_add(1, Ordering::SeqCst);

        match self.verify_failure {
            Some(reason) => Err(Error::Transport(reason.into())),
            None => Ok(()),
        }
    }
}
