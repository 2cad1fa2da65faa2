use actix_web::{get, web, Responder};

use super::error_response::identity_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/identity/status")]
pub async fn identity_status_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.identity.status.execute(user.user_id).await {
        Ok(status) => ApiResponse::success(status),
        Err(e) => identity_error_response(e),
    }
}
