//! Router configuration for the formrelay HTTP surface.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, not_found, send_contact, AppState};
use super::middleware::{create_cors_layer, handle_panic};
use crate::config::WebConfig;

/// Create the main router.
///
/// Wrong methods on known paths fall through to the same 404 as unknown
/// paths.
pub fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    Router::new()
        .route("/health", get(health_check).fallback(not_found))
        .route("/send", post(send_contact).fallback(not_found))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.frontend_url)),
        )
        .with_state(app_state)
}
