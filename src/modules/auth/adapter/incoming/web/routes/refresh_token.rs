use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::auth::application::ports::incoming::use_cases::{
    RefreshAccessTokenCommand, RefreshAccessTokenError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[post("/api/auth/refresh-token")]
pub async fn refresh_token_handler(
    data: web::Data<AppState>,
    payload: web::Json<RefreshTokenRequest>,
) -> impl Responder {
    let invalid = || ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid refresh token");

    let command = match RefreshAccessTokenCommand::new(payload.into_inner().refresh_token) {
        Ok(cmd) => cmd,
        Err(_) => return invalid(),
    };

    match data.auth.refresh_token.execute(command).await {
        Ok(refreshed) => ApiResponse::success(refreshed),
        Err(RefreshAccessTokenError::InvalidRefreshToken) => invalid(),
        Err(e) => {
            tracing::warn!("Refresh token rejected: {}", e);
            invalid()
        }
    }
}
