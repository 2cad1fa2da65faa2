use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::error_response::identity_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::ports::incoming::use_cases::InitiateVerificationCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateVerificationRequest {
    #[serde(default)]
    pub mobile_number: Option<String>,
}

#[post("/api/identity/initiate")]
pub async fn initiate_verification_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: Option<web::Json<InitiateVerificationRequest>>,
) -> impl Responder {
    let request = payload.map(|p| p.into_inner()).unwrap_or_default();

    let command = match InitiateVerificationCommand::new(user.user_id, request.mobile_number) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.identity.initiate.execute(command).await {
        Ok(initiation) => ApiResponse::success(initiation),
        Err(e) => identity_error_response(e),
    }
}
