//! HTTP handlers for formrelay.

pub mod contact;
pub mod health;

pub use contact::*;
pub use health::*;

use crate::contact::ContactService;
use crate::web::error::{ApiError, NOT_FOUND_MESSAGE};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Contact submission pipeline.
    pub contact: ContactService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(contact: ContactService) -> Self {
        Self { contact }
    }
}

/// Fallback for unknown routes and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::not_found(NOT_FOUND_MESSAGE)
}
