//! Last-resort handler for panics inside request handling.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::web::error::{ApiError, INTERNAL_ERROR_MESSAGE};

/// Convert a handler panic into a generic 500 response.
///
/// The panic payload is logged and never sent to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Unhandled error while processing request: {}", detail);

    ApiError::internal(INTERNAL_ERROR_MESSAGE).into_response()
}
