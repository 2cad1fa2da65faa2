use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::video_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::video::application::ports::incoming::use_cases::SubmitVideoCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVideoRequest {
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[post("/api/video-verification")]
pub async fn submit_video_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<SubmitVideoRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let command = match SubmitVideoCommand::new(user.user_id, request.photo_url, request.video_url)
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.video.submit.execute(command).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => video_error_response(e),
    }
}
