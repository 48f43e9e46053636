//! JSON extraction for Web API requests.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::web::error::{
    ApiError, INVALID_JSON_MESSAGE, PAYLOAD_TOO_LARGE_MESSAGE, UNSUPPORTED_MEDIA_TYPE_MESSAGE,
};

/// A JSON object extractor whose rejections use the API error format.
///
/// Oversized bodies become 413, a missing JSON content type becomes 415.
/// Syntax errors, non-object bodies and shape mismatches become 400.
///
/// # Example
///
/// ```ignore
/// use formrelay::web::dto::ApiJson;
///
/// async fn send(ApiJson(form): ApiJson<ContactForm>) -> Result<Json<StatusResponse>, ApiError> {
///     // form is deserialized
///     // ...
/// }
/// ```
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        if !value.is_object() {
            tracing::debug!("Rejected request body: not a JSON object");
            return Err(ApiError::bad_request(INVALID_JSON_MESSAGE));
        }

        serde_json::from_value(value).map(ApiJson).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            ApiError::bad_request(INVALID_JSON_MESSAGE)
        })
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::payload_too_large(PAYLOAD_TOO_LARGE_MESSAGE),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => {
            ApiError::unsupported_media_type(UNSUPPORTED_MEDIA_TYPE_MESSAGE)
        }
        _ => ApiError::bad_request(INVALID_JSON_MESSAGE),
    }
}
