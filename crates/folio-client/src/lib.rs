//! Client side of the contact flow
//!
//! [`ContactForm`] holds what the visitor typed and turns the outcome of a submission into a
//! [`Notification`]. [`TypingTitle`] is the little typewriter effect under the site title.

#[macro_use]
extern crate tracing;

pub use self::{
    api::{ApiError, ContactApi, HttpContactApi},
    form::{ContactForm, Field, FormFields, Level, Notification},
    typing::{Phase, TypingTitle},
};

pub mod api;
pub mod form;
pub mod typing;
