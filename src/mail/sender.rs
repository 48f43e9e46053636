//! The mail collaborator seam.

use async_trait::async_trait;

use super::{MailError, OutgoingMail};

/// Sends outgoing mail.
///
/// Implementations classify failures into [`MailError`] variants at this
/// boundary, so callers never inspect transport internals.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a single email.
    async fn send_mail(&self, mail: OutgoingMail) -> Result<(), MailError>;
}
