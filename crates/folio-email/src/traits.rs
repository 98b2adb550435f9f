use crate::error::Result;

#[derive(Debug)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,

    /// Plain text alternative for clients that don't render HTML
    pub plain_text: String,
}

pub trait RenderableEmail {
    fn render_email(&self) -> Result<RenderedEmail>;
}
