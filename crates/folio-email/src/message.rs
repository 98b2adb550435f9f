use crate::{
    error::Result,
    mails::contact::ContactEmail,
    submission::ContactSubmission,
    traits::{RenderableEmail, RenderedEmail},
};
use lettre::message::Mailbox;

/// Fully rendered email, ready to be handed to a transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: Mailbox,
    pub to: Mailbox,

    /// Address of the submitter, exactly as entered
    pub reply_to: String,

    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutboundMessage {
    pub fn compose(submission: &ContactSubmission, from: &Mailbox, to: &Mailbox) -> Result<Self> {
        let RenderedEmail {
            subject,
            body,
            plain_text,
        } = ContactEmail::from(submission).render_email()?;

        Ok(Self {
            from: from.clone(),
            to: to.clone(),
            reply_to: submission.email().to_owned(),
            subject,
            text: plain_text,
            html: body,
        })
    }

    /// Reply-To mailbox, if the submitted address parses as one
    ///
    /// Submitted addresses are never format-checked, so transports omit the header instead of
    /// failing the send.
    #[must_use]
    pub fn reply_to_mailbox(&self) -> Option<Mailbox> {
        match self.reply_to.parse() {
            Ok(mailbox) => Some(mailbox),
            Err(error) => {
                warn!(?error, reply_to = %self.reply_to, "submitted address is not a valid mailbox");
                None
            }
        }
    }
}
