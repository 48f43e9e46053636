//! Plain text and HTML bodies for the relayed email.

use super::sanitize::escape_html;
use super::Submission;

/// Render the plain text body.
pub fn render_text(submission: &Submission, submitted_at: &str) -> String {
    format!(
        "New contact form submission\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Subject: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         Submitted at: {}\n",
        submission.name,
        submission.email,
        submission.phone_or_placeholder(),
        submission.subject,
        submission.message,
        submitted_at,
    )
}

/// Render the HTML body.
///
/// Message newlines become `<br>`. With `escape` set, every interpolated
/// value is HTML-escaped first.
pub fn render_html(submission: &Submission, submitted_at: &str, escape: bool) -> String {
    let html = |s: &str| {
        if escape {
            escape_html(s)
        } else {
            s.to_string()
        }
    };

    let message = html(&submission.message)
        .replace("\r\n", "<br>")
        .replace('\n', "<br>");

    format!(
        "<h2>New contact form submission</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Phone:</strong> {}</p>\n\
         <p><strong>Subject:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n\
         <hr>\n\
         <p><small>Submitted at: {}</small></p>\n",
        html(&submission.name),
        html(&submission.email),
        html(submission.phone_or_placeholder()),
        html(&submission.subject),
        message,
        html(submitted_at),
    )
}
