//! Contact form handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::contact::ContactForm;
use crate::web::dto::{ApiJson, StatusResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Message returned once the mail server accepts the submission.
pub const SENT_MESSAGE: &str = "Email sent successfully";

/// POST /send - Relay a contact form submission by email.
pub async fn send_contact(
    State(state): State<Arc<AppState>>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.contact.submit(form).await?;
    Ok(Json(StatusResponse::success(SENT_MESSAGE)))
}
