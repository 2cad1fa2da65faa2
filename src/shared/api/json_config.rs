use crate::shared::api::ApiResponse;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::JsonConfig;

/// Request bodies are small forms; the webhook reads raw bytes and is not bound by this.
pub const JSON_BODY_LIMIT: usize = 64 * 1024;

/// Turns extractor failures into the uniform envelope instead of actix's plain text.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, req| {
            tracing::debug!(path = %req.path(), error = %err, "Rejected JSON body");
            let response = match &err {
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    ApiResponse::payload_too_large("Request body is too large")
                }
                JsonPayloadError::ContentType => {
                    ApiResponse::validation("Content-Type must be application/json")
                }
                JsonPayloadError::Deserialize(inner) => ApiResponse::validation(&inner.to_string()),
                other => ApiResponse::validation(&other.to_string()),
            };
            InternalError::from_response(err, response).into()
        })
}
