//! Mail types for formrelay.

use std::time::Duration;

use thiserror::Error;

/// An email ready to be handed to a [`Mailer`](super::Mailer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub text: String,
    /// HTML body.
    pub html: String,
    /// Address replies should go to, if any.
    pub reply_to: Option<String>,
}

impl OutgoingMail {
    /// Create a new outgoing mail without a reply-to address.
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            html: html.into(),
            reply_to: None,
        }
    }

    /// Set the reply-to address.
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }
}

/// Why a send failed.
///
/// The mailer decides the variant; callers only match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// The mail server rejected the configured credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The message could not be built (bad address, bad header).
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The send did not complete in time.
    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}

impl MailError {
    /// Whether this failure is caused by rejected credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, MailError::Auth(_))
    }
}
