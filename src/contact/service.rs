//! Contact submission service.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use lettre::message::Mailbox;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::render::{render_html, render_text};
use super::{ContactError, ContactForm, Submission};
use crate::config::{Config, ContactConfig};
use crate::datetime::{format_utc_datetime, SUBMITTED_AT_FORMAT};
use crate::mail::{MailError, Mailer, OutgoingMail};

/// Validates contact submissions and relays them to the configured recipient.
#[derive(Clone)]
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    recipient: String,
    subject_prefix: String,
    timezone: String,
    escape_html: bool,
    send_timeout: Duration,
}

impl ContactService {
    /// Create a new contact service.
    pub fn new(
        mailer: Arc<dyn Mailer>,
        recipient: impl Into<String>,
        contact: &ContactConfig,
        send_timeout: Duration,
    ) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
            subject_prefix: contact.subject_prefix.clone(),
            timezone: contact.timezone.clone(),
            escape_html: contact.escape_html,
            send_timeout,
        }
    }

    /// Create a contact service from the full configuration.
    pub fn from_config(mailer: Arc<dyn Mailer>, config: &Config) -> Self {
        Self::new(
            mailer,
            config.mail.recipient.clone(),
            &config.contact,
            Duration::from_secs(config.mail.send_timeout_secs),
        )
    }

    /// Validate, sanitize and relay a contact form.
    pub async fn submit(&self, form: ContactForm) -> Result<(), ContactError> {
        let submission = Submission::from_form(&form, Utc::now()).map_err(|e| {
            debug!("Rejected contact submission: {}", e);
            e
        })?;

        let submission_id = Uuid::new_v4();
        let mail = self.compose(&submission);

        match tokio::time::timeout(self.send_timeout, self.mailer.send_mail(mail)).await {
            Ok(Ok(())) => {
                info!(%submission_id, "Contact email sent");
                Ok(())
            }
            Ok(Err(e)) => {
                error!(%submission_id, error = %e, "Failed to send contact email");
                Err(ContactError::Mail(e))
            }
            Err(_) => {
                let e = MailError::Timeout(self.send_timeout);
                error!(%submission_id, error = %e, "Failed to send contact email");
                Err(ContactError::Mail(e))
            }
        }
    }

    /// Build the outgoing mail for a submission.
    pub fn compose(&self, submission: &Submission) -> OutgoingMail {
        let submitted_at =
            format_utc_datetime(&submission.submitted_at, &self.timezone, SUBMITTED_AT_FORMAT);

        let mut mail = OutgoingMail::new(
            self.recipient.clone(),
            format!("{} {}", self.subject_prefix, submission.subject),
            render_text(submission, &submitted_at),
            render_html(submission, &submitted_at, self.escape_html),
        );

        // The format check is looser than RFC 5322, so not every accepted
        // address can be used as a mailbox.
        match submission.email.parse::<Mailbox>() {
            Ok(_) => mail = mail.with_reply_to(submission.email.clone()),
            Err(e) => warn!(
                email = %submission.email,
                error = %e,
                "Submitter address is not a valid mailbox, omitting Reply-To"
            ),
        }

        mail
    }
}
