//! Outbound mail for formrelay.
//!
//! This module provides the mail collaborator used by the contact handler:
//! - The [`Mailer`] trait and its error taxonomy
//! - An SMTP implementation on lettre's async transport
//! - A stub implementation that records messages for development and tests

mod message;
mod sender;
mod smtp;
mod stub;
mod types;

use std::sync::Arc;

pub use message::build_message;
pub use sender::Mailer;
pub use smtp::{classify_error, is_auth_failure, SmtpMailer, SmtpTransport};
pub use stub::StubMailer;
pub use types::{MailError, OutgoingMail};

use crate::config::{MailConfig, MailTransportKind};
use crate::Result;

/// Build the mailer selected by `config.transport`.
pub fn build_mailer(config: &MailConfig) -> Result<Arc<dyn Mailer>> {
    match config.transport {
        MailTransportKind::Smtp => Ok(Arc::new(SmtpMailer::from_config(config)?)),
        MailTransportKind::Stub => {
            let from = if config.sender_address().is_empty() {
                "Contact Form <noreply@localhost>"
                    .parse()
                    .map_err(|e| crate::RelayError::Config(format!("invalid stub sender: {e}")))?
            } else {
                config.sender_mailbox()?
            };
            tracing::warn!("Using stub mail transport; submissions will not be delivered");
            Ok(Arc::new(StubMailer::accepting(from)))
        }
    }
}
