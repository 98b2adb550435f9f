use crate::{
    error::Result,
    submission::ContactSubmission,
    traits::{RenderableEmail, RenderedEmail},
};
use askama::Template;

/// Notification sent to the site owner for every accepted submission
#[derive(Template)]
#[template(escape = "html", path = "contact.html")]
pub struct ContactEmail<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> From<&'a ContactSubmission> for ContactEmail<'a> {
    fn from(submission: &'a ContactSubmission) -> Self {
        Self {
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
            lines: submission.message().lines().collect(),
        }
    }
}

impl RenderableEmail for ContactEmail<'_> {
    fn render_email(&self) -> Result<RenderedEmail> {
        let body = self.render()?;

        let subject = format!(
            "New Contact Form Submission from {} ({})",
            self.name, self.email
        );
        let plain_text = format!(
            "Name: {}\nEmail: {}\nMessage: {}\n",
            self.name, self.email, self.message
        );

        Ok(RenderedEmail {
            subject,
            body,
            plain_text,
        })
    }
}
