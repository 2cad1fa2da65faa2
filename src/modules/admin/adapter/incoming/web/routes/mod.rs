mod dashboard_stats;
mod pending_users;
mod review_user;
mod user_details;

pub use dashboard_stats::dashboard_stats_handler;
pub use pending_users::pending_users_handler;
pub use review_user::{approve_user_handler, reject_user_handler};
pub use user_details::user_details_handler;

use actix_web::HttpResponse;

use crate::modules::admin::application::ports::incoming::use_cases::AdminError;
use crate::shared::api::ApiResponse;

fn admin_error_response(e: AdminError) -> HttpResponse {
    match e {
        AdminError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", &e.to_string()),
        AdminError::InvalidStatus(_) => ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
        AdminError::RepositoryError(msg) => {
            tracing::error!("Admin operation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
