use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::application::ports::incoming::use_cases::{
    SendOtpCommand, SendOtpError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
    pub username: Option<String>,
}

/// Issues a one-time code. Supplying a username registers a new account.
#[post("/api/auth/send-otp")]
pub async fn send_otp_handler(
    data: web::Data<AppState>,
    payload: web::Json<SendOtpRequest>,
) -> impl Responder {
    let SendOtpRequest { email, username } = payload.into_inner();

    let command = match SendOtpCommand::new(email, username) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.auth.send_otp.execute(command).await {
        Ok(dispatch) => ApiResponse::success(dispatch),
        Err(e) => map_send_otp_error(e),
    }
}

fn map_send_otp_error(e: SendOtpError) -> HttpResponse {
    match e {
        SendOtpError::UserAlreadyExists => ApiResponse::conflict("EMAIL_TAKEN", &e.to_string()),
        SendOtpError::UsernameTaken => ApiResponse::conflict("USERNAME_TAKEN", &e.to_string()),
        SendOtpError::UserNotFound => ApiResponse::conflict("USER_NOT_FOUND", &e.to_string()),
        SendOtpError::EmailNotVerified => {
            ApiResponse::bad_request("EMAIL_NOT_VERIFIED", &e.to_string())
        }
        SendOtpError::StoreUnavailable(msg) => {
            tracing::error!("OTP store unavailable: {}", msg);
            ApiResponse::service_unavailable("OTP_STORE_UNAVAILABLE", "Please try again shortly")
        }
        SendOtpError::RepositoryError(msg) => {
            tracing::error!("Send OTP failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
