use actix_web::{get, post, web, Responder};
use serde::Deserialize;

use super::error_response::identity_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCallbackRequest {
    pub verification_id: String,
}

/// Called by the frontend once the user returns from the consent page.
#[post("/api/identity/callback")]
pub async fn verification_callback_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<VerificationCallbackRequest>,
) -> impl Responder {
    let verification_id = payload.into_inner().verification_id;
    if verification_id.trim().is_empty() {
        return ApiResponse::validation("verificationId is required");
    }

    match data
        .identity
        .callback
        .execute(user.user_id, verification_id.trim())
        .await
    {
        Ok(progress) => ApiResponse::success(progress),
        Err(e) => identity_error_response(e),
    }
}

#[get("/api/identity/sessions/{verification_id}")]
pub async fn session_status_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let verification_id = path.into_inner();

    match data
        .identity
        .session_status
        .execute(user.user_id, &verification_id)
        .await
    {
        Ok(progress) => ApiResponse::success(progress),
        Err(e) => identity_error_response(e),
    }
}
