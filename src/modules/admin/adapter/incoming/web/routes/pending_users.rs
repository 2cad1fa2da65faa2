use actix_web::{get, web, Responder};

use super::admin_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/users/pending")]
pub async fn pending_users_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.pending_users.execute().await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => admin_error_response(e),
    }
}
