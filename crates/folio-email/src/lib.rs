#[macro_use]
extern crate tracing;

pub use self::{
    error::{Error, Result},
    message::OutboundMessage,
    service::ContactService,
    submission::{ContactSubmission, RawSubmission, ValidationError},
    transport::{AnyTransport, MailTransport},
};
pub use lettre;

pub mod error;
pub mod mails;
pub mod message;
pub mod service;
pub mod submission;
pub mod traits;
pub mod transport;
