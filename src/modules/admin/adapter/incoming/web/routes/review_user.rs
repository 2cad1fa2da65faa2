use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use super::admin_error_response;
use crate::modules::admin::application::ports::incoming::use_cases::RejectUserCommand;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RejectUserRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

fn parse_user_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

#[post("/api/admin/users/{id}/approve")]
pub async fn approve_user_handler(
    admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(user_id) = parse_user_id(&path.into_inner()) else {
        return ApiResponse::validation("Invalid user id");
    };

    tracing::info!(admin_id = %admin.user_id, user_id = %user_id, "Approve requested");

    match data.admin.approve.execute(user_id).await {
        Ok(decision) => ApiResponse::success(decision),
        Err(e) => admin_error_response(e),
    }
}

#[post("/api/admin/users/{id}/reject")]
pub async fn reject_user_handler(
    admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
    payload: Option<web::Json<RejectUserRequest>>,
) -> impl Responder {
    let Some(user_id) = parse_user_id(&path.into_inner()) else {
        return ApiResponse::validation("Invalid user id");
    };
    let request = payload.map(|p| p.into_inner()).unwrap_or_default();

    let command = match RejectUserCommand::new(user_id, request.reason) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    tracing::info!(admin_id = %admin.user_id, user_id = %user_id, "Reject requested");

    match data.admin.reject.execute(command).await {
        Ok(decision) => ApiResponse::success(decision),
        Err(e) => admin_error_response(e),
    }
}
