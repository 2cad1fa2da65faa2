use actix_web::{post, web, Responder};

use super::error_response::identity_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/identity/cleanup-expired")]
pub async fn cleanup_expired_sessions_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.identity.cleanup.execute().await {
        Ok(cleanup) => {
            tracing::info!(
                admin_id = %admin.user_id,
                deleted = cleanup.deleted,
                "Session cleanup requested"
            );
            ApiResponse::success(cleanup)
        }
        Err(e) => identity_error_response(e),
    }
}
