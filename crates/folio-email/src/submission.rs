use serde::Deserialize;
use thiserror::Error;

/// Decoded request body, before any checks ran
///
/// A field that is present but has a non-string value fails decoding altogether.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Names of the fields that were absent, null, empty or whitespace-only
    #[error("Missing required fields.")]
    MissingFields(Vec<&'static str>),
}

/// A contact submission where every field is known to be non-empty
///
/// Constructible only through [`ContactSubmission::validate`]. Fields are stored trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn validate(raw: RawSubmission) -> Result<Self, ValidationError> {
        fn required(
            field: &'static str,
            value: Option<String>,
            missing: &mut Vec<&'static str>,
        ) -> String {
            match value {
                Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
                _ => {
                    missing.push(field);
                    String::new()
                }
            }
        }

        let mut missing = Vec::new();
        let name = required("name", raw.name, &mut missing);
        let email = required("email", raw.email, &mut missing);
        let message = required("message", raw.message, &mut missing);

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod test {
    use super::{ContactSubmission, RawSubmission, ValidationError};
    use pretty_assertions::assert_eq;

    fn raw(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> RawSubmission {
        RawSubmission {
            name: name.map(ToOwned::to_owned),
            email: email.map(ToOwned::to_owned),
            message: message.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn accepts_complete_submission() {
        let submission =
            ContactSubmission::validate(raw(Some("Jane"), Some("jane@x.com"), Some("Hi")))
                .unwrap();

        assert_eq!(submission.name(), "Jane");
        assert_eq!(submission.email(), "jane@x.com");
        assert_eq!(submission.message(), "Hi");
    }

    #[test]
    fn trims_fields() {
        let submission = ContactSubmission::validate(raw(
            Some("  Jane "),
            Some("\tjane@x.com\n"),
            Some("\nHello\nthere\n\n"),
        ))
        .unwrap();

        assert_eq!(submission.name(), "Jane");
        assert_eq!(submission.email(), "jane@x.com");
        assert_eq!(submission.message(), "Hello\nthere");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        let error =
            ContactSubmission::validate(raw(Some(""), Some("jane@x.com"), Some("   \n")))
                .unwrap_err();

        assert_eq!(
            error,
            ValidationError::MissingFields(vec!["name", "message"])
        );
        assert_eq!(error.to_string(), "Missing required fields.");
    }

    #[test]
    fn rejects_absent_fields() {
        let error = ContactSubmission::validate(RawSubmission::default()).unwrap_err();
        assert_eq!(
            error,
            ValidationError::MissingFields(vec!["name", "email", "message"])
        );
    }

    #[test]
    fn null_is_absent() {
        let raw: RawSubmission =
            sonic_rs::from_str(r#"{"name":null,"email":"jane@x.com","message":"Hi"}"#).unwrap();
        let error = ContactSubmission::validate(raw).unwrap_err();

        assert_eq!(error, ValidationError::MissingFields(vec!["name"]));
    }

    #[test]
    fn non_string_fails_decoding() {
        let result = sonic_rs::from_str::<RawSubmission>(
            r#"{"name":42,"email":"jane@x.com","message":"Hi"}"#,
        );
        assert!(result.is_err());
    }
}
