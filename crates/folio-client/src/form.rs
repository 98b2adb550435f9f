use crate::api::{ApiError, ContactApi};
use parking_lot::Mutex;
use serde::Serialize;
use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FALLBACK_ERROR: &str = "Server error. Please try again.";
pub const BUSY_MESSAGE: &str = "Your message is still being sent.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// What the visitor typed, sent as-is
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Fields that would fail the `required` check of the input elements
    #[must_use]
    pub fn missing(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Clears the submitting flag on every exit path
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ContactForm<A> {
    api: A,
    fields: Mutex<FormFields>,
    submitting: AtomicBool,
}

impl<A> ContactForm<A>
where
    A: ContactApi,
{
    pub fn new(api: A) -> Self {
        Self {
            api,
            fields: Mutex::default(),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        *self.fields.lock().field_mut(field) = value.into();
    }

    #[must_use]
    pub fn fields(&self) -> FormFields {
        self.fields.lock().clone()
    }

    /// Whether the submit control should currently be disabled
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub async fn submit(&self) -> Notification {
        let Some(_guard) = SubmitGuard::acquire(&self.submitting) else {
            return Notification::new(Level::Info, BUSY_MESSAGE);
        };

        let fields = self.fields();
        let missing = fields.missing();
        if !missing.is_empty() {
            debug!(?missing, "not sending incomplete form");
            return Notification::new(Level::Warning, MISSING_FIELDS_MESSAGE);
        }

        match self.api.submit(&fields).await {
            Ok(()) => {
                *self.fields.lock() = FormFields::default();
                Notification::new(Level::Success, SUCCESS_MESSAGE)
            }
            Err(ApiError::Rejected {
                reason: Some(reason),
                status,
            }) => {
                info!(%status, %reason, "submission rejected");
                Notification::new(Level::Error, format!("Failed: {reason}"))
            }
            Err(error) => {
                error!(?error, "submission failed");
                Notification::new(Level::Error, FALLBACK_ERROR)
            }
        }
    }
}
