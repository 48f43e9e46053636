//! Contact form input and the validated submission built from it.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::sanitize::sanitize;
use super::validation::{is_present, is_valid_email};
use super::ContactError;

/// Raw contact form body.
///
/// Fields are kept as arbitrary JSON so that wrong types reach the
/// validation rules instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub subject: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

/// A validated, sanitized submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    /// Empty when not provided.
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Validate and sanitize a contact form.
    ///
    /// Required fields are checked first, then the email shape, then every
    /// field is sanitized.
    pub fn from_form(
        form: &ContactForm,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ContactError> {
        let required = [&form.name, &form.email, &form.subject, &form.message];
        if !required.iter().all(|field| is_present(field.as_ref())) {
            return Err(ContactError::MissingFields);
        }

        match &form.email {
            Some(Value::String(email)) if is_valid_email(email) => {}
            _ => return Err(ContactError::InvalidEmail),
        }

        Ok(Self {
            name: sanitize(form.name.as_ref()),
            email: sanitize(form.email.as_ref()),
            phone: sanitize(form.phone.as_ref()),
            subject: sanitize(form.subject.as_ref()),
            message: sanitize(form.message.as_ref()),
            submitted_at,
        })
    }

    /// Phone number for display.
    pub fn phone_or_placeholder(&self) -> &str {
        if self.phone.is_empty() {
            "Not provided"
        } else {
            &self.phone
        }
    }
}
