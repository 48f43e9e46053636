//! API error handling for the formrelay HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::contact::ContactError;
use crate::web::dto::StatusResponse;

/// Message for a submission missing required fields.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields. Please provide name, email, subject, and message.";
/// Message for a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format.";
/// Message when the mail server rejects the configured credentials.
pub const MAIL_AUTH_MESSAGE: &str =
    "Email authentication failed. Please check the server's email credentials.";
/// Message for any other send failure.
pub const MAIL_FAILED_MESSAGE: &str = "Failed to send email. Please try again later.";
/// Message for unknown routes.
pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
/// Message for unhandled failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
/// Message for bodies that are not a JSON object.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body.";
/// Message for requests without a JSON content type.
pub const UNSUPPORTED_MEDIA_TYPE_MESSAGE: &str = "Expected a JSON request body.";
/// Message for bodies over the size limit.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large.";

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad request (400).
    BadRequest,
    /// Not found (404).
    NotFound,
    /// Payload too large (413).
    PayloadTooLarge,
    /// Unsupported media type (415).
    UnsupportedMediaType,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorCode::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error type.
///
/// Rendered as `{"success": false, "message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create a payload too large error.
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PayloadTooLarge, message)
    }

    /// Create an unsupported media type error.
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedMediaType, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Caller-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        (status, Json(StatusResponse::failure(self.message))).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MissingFields => ApiError::bad_request(MISSING_FIELDS_MESSAGE),
            ContactError::InvalidEmail => ApiError::bad_request(INVALID_EMAIL_MESSAGE),
            // Detail was already logged by the contact service
            ContactError::Mail(e) if e.is_auth() => ApiError::internal(MAIL_AUTH_MESSAGE),
            ContactError::Mail(_) => ApiError::internal(MAIL_FAILED_MESSAGE),
        }
    }
}
