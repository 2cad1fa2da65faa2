use actix_web::{get, web, Responder};

use super::admin_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/dashboard/stats")]
pub async fn dashboard_stats_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.dashboard.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => admin_error_response(e),
    }
}
