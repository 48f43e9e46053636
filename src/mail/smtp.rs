//! SMTP mailer backed by lettre's async tokio transport.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::{Category, Code, Detail, Severity};
use lettre::transport::smtp::Error as SmtpError;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{info, warn};

use super::message::build_message;
use super::{MailError, Mailer, OutgoingMail};
use crate::config::{MailConfig, SmtpSecurity};
use crate::{RelayError, Result};

/// Async SMTP transport type.
pub type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// Sends mail through an SMTP relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a mailer from an already built transport.
    pub fn new(transport: SmtpTransport, from: Mailbox) -> Self {
        Self { transport, from }
    }

    /// Build the transport described by the mail configuration.
    pub fn from_config(config: &MailConfig) -> Result<Self> {
        let from = config.sender_mailbox()?;
        let timeout = Duration::from_secs(config.send_timeout_secs);

        let builder = match config.security {
            SmtpSecurity::Starttls => SmtpTransport::starttls_relay(&config.smtp_host)
                .map_err(|e| RelayError::Config(format!("invalid SMTP relay: {e}")))?,
            SmtpSecurity::Tls => SmtpTransport::relay(&config.smtp_host)
                .map_err(|e| RelayError::Config(format!("invalid SMTP relay: {e}")))?,
            SmtpSecurity::None => {
                warn!(
                    smtp_host = %config.smtp_host,
                    "SMTP transport configured without TLS"
                );
                SmtpTransport::builder_dangerous(&config.smtp_host)
            }
        };

        let mut builder = builder.port(config.smtp_port).timeout(Some(timeout));
        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            security = ?config.security,
            from = %from,
            "SMTP mailer initialized"
        );

        Ok(Self::new(builder.build(), from))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_mail(&self, mail: OutgoingMail) -> std::result::Result<(), MailError> {
        let message = build_message(&self.from, mail)?;
        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(classify_error)
    }
}

/// Map a lettre SMTP error onto [`MailError`].
pub fn classify_error(err: SmtpError) -> MailError {
    match err.status() {
        Some(code) if is_auth_failure(code) => MailError::Auth(err.to_string()),
        _ => MailError::Transport(err.to_string()),
    }
}

/// 530 (authentication required), 534 (mechanism too weak)
/// and 535 (credentials invalid).
pub fn is_auth_failure(code: Code) -> bool {
    code.severity == Severity::PermanentNegativeCompletion
        && code.category == Category::Unspecified3
        && matches!(code.detail, Detail::Zero | Detail::Four | Detail::Five)
}
