//! Conversion of [`OutgoingMail`] into a lettre [`Message`].

use lettre::message::{Mailbox, MultiPart};
use lettre::Message;

use super::{MailError, OutgoingMail};

/// Build a `multipart/alternative` message with plain text and HTML parts.
pub fn build_message(from: &Mailbox, mail: OutgoingMail) -> Result<Message, MailError> {
    let to: Mailbox = mail
        .to
        .parse()
        .map_err(|e| MailError::InvalidMessage(format!("invalid recipient '{}': {e}", mail.to)))?;

    let mut builder = Message::builder()
        .from(from.clone())
        .to(to)
        .subject(mail.subject);

    if let Some(reply_to) = mail.reply_to {
        let reply_to: Mailbox = reply_to.parse().map_err(|e| {
            MailError::InvalidMessage(format!("invalid reply-to '{reply_to}': {e}"))
        })?;
        builder = builder.reply_to(reply_to);
    }

    builder
        .multipart(MultiPart::alternative_plain_html(mail.text, mail.html))
        .map_err(|e| MailError::InvalidMessage(e.to_string()))
}
