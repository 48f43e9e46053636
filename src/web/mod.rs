//! HTTP surface for formrelay.
//!
//! Exposes `POST /send` for contact submissions and `GET /health` for
//! liveness checks. Every other path answers with a JSON 404.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
