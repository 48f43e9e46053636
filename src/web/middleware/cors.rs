//! CORS middleware configuration.

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Create a CORS layer that admits only the configured frontend origin.
///
/// The origin is echoed back only to requests that carry it.
///
/// An unparsable origin yields a layer that allows no origin at all.
pub fn create_cors_layer(frontend_url: &str) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE, ACCEPT, AUTHORIZATION])
            .allow_credentials(true)
            .allow_origin([origin]),
        Err(_) => {
            tracing::warn!(
                "Invalid frontend_url {:?}; cross-origin requests disabled",
                frontend_url
            );
            CorsLayer::new()
        }
    }
}
