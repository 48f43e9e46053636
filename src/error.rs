//! Error types for formrelay.

use thiserror::Error;

use crate::mail::MailError;

/// Common error type for formrelay.
///
/// Covers startup failures: reading and validating configuration,
/// building the mail transport, binding the listener. Per-request
/// failures are handled by [`crate::contact::ContactError`] and
/// [`crate::web::ApiError`] instead.
#[derive(Error, Debug)]
pub enum RelayError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Mail transport error.
    #[error("mail error: {0}")]
    Mail(#[from] MailError),
}

/// Result type alias for formrelay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
