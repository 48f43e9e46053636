//! Contact form handling for formrelay.
//!
//! This module provides the submission pipeline:
//! - Required-field and email-shape validation
//! - Sanitization of free-text fields
//! - Plain text and HTML body rendering
//! - Relaying through a [`Mailer`](crate::mail::Mailer) under a timeout

mod render;
mod sanitize;
mod service;
mod submission;
mod validation;

use thiserror::Error;

use crate::mail::MailError;

pub use render::{render_html, render_text};
pub use sanitize::{escape_html, sanitize, sanitize_str};
pub use service::ContactService;
pub use submission::{ContactForm, Submission};
pub use validation::{is_present, is_valid_email};

/// Why a submission was not relayed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One of name, email, subject or message is missing.
    #[error("missing required fields")]
    MissingFields,

    /// The email does not look like `local@domain.tld`.
    #[error("invalid email format")]
    InvalidEmail,

    /// The mailer failed.
    #[error(transparent)]
    Mail(#[from] MailError),
}
