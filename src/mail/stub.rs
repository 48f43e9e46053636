//! Mailer that records messages instead of sending them.
//!
//! Used for local development (`mail.transport = "stub"`) and in tests.

use async_trait::async_trait;
use lettre::address::Envelope;
use lettre::message::Mailbox;
use lettre::transport::stub::AsyncStubTransport;
use lettre::AsyncTransport;
use tracing::info;

use super::message::build_message;
use super::{MailError, Mailer, OutgoingMail};

/// Stub mailer wrapping lettre's [`AsyncStubTransport`].
#[derive(Clone)]
pub struct StubMailer {
    transport: AsyncStubTransport,
    from: Mailbox,
}

impl StubMailer {
    /// Create a stub mailer that accepts every message.
    pub fn accepting(from: Mailbox) -> Self {
        Self {
            transport: AsyncStubTransport::new_ok(),
            from,
        }
    }

    /// Create a stub mailer that rejects every message.
    pub fn rejecting(from: Mailbox) -> Self {
        Self {
            transport: AsyncStubTransport::new_error(),
            from,
        }
    }

    /// Messages handed to the transport so far, as (envelope, raw message).
    pub async fn messages(&self) -> Vec<(Envelope, String)> {
        self.transport.messages().await
    }
}

#[async_trait]
impl Mailer for StubMailer {
    async fn send_mail(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let subject = mail.subject.clone();
        let message = build_message(&self.from, mail)?;
        let recipients: Vec<String> = message
            .envelope()
            .to()
            .iter()
            .map(|a| a.to_string())
            .collect();

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        info!(
            to = ?recipients,
            subject = %subject,
            "Stub mailer recorded message (not sent)"
        );
        Ok(())
    }
}
