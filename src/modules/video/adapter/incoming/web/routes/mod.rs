mod submit_video;
mod video_status;

pub use submit_video::submit_video_handler;
pub use video_status::video_status_handler;

use actix_web::HttpResponse;

use crate::modules::video::application::ports::incoming::use_cases::VideoVerificationError;
use crate::shared::api::ApiResponse;

fn video_error_response(e: VideoVerificationError) -> HttpResponse {
    match e {
        VideoVerificationError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", &e.to_string())
        }
        VideoVerificationError::NotFound => {
            ApiResponse::not_found("VIDEO_NOT_FOUND", &e.to_string())
        }
        VideoVerificationError::InvalidStatus(_) => {
            ApiResponse::bad_request("INVALID_STATUS", &e.to_string())
        }
        VideoVerificationError::RepositoryError(msg) => {
            tracing::error!("Video verification failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
