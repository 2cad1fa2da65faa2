use actix_web::{get, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::onboarding::application::ports::incoming::use_cases::GetOnboardingStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/onboarding/status")]
pub async fn onboarding_status_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.onboarding.status.execute(user.user_id).await {
        Ok(progress) => ApiResponse::success(progress),
        Err(GetOnboardingStatusError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetOnboardingStatusError::RepositoryError(msg)) => {
            tracing::error!("Onboarding status lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
