use actix_web::{get, web, Responder};

use super::video_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/video-verification/status")]
pub async fn video_status_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.video.status.execute(user.user_id).await {
        Ok(submission) => ApiResponse::success(submission),
        Err(e) => video_error_response(e),
    }
}
