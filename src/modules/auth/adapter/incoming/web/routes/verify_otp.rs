use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::application::ports::incoming::use_cases::{
    SignInWithOtpError, VerifyOtpCommand, VerifyOtpError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[post("/api/auth/verify-otp")]
pub async fn verify_otp_handler(
    data: web::Data<AppState>,
    payload: web::Json<VerifyOtpRequest>,
) -> impl Responder {
    let VerifyOtpRequest { email, otp } = payload.into_inner();

    let command = match VerifyOtpCommand::new(email, otp) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.auth.sign_in.execute(command).await {
        Ok(result) => ApiResponse::success(result),
        Err(SignInWithOtpError::Verify(e)) => map_verify_error(e),
        Err(SignInWithOtpError::Tokens(e)) => {
            tracing::error!("Token issuance failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn map_verify_error(e: VerifyOtpError) -> HttpResponse {
    match e {
        VerifyOtpError::NotFound => ApiResponse::not_found("OTP_NOT_FOUND", &e.to_string()),
        VerifyOtpError::Expired => ApiResponse::bad_request("OTP_EXPIRED", &e.to_string()),
        VerifyOtpError::TooManyAttempts => {
            ApiResponse::bad_request("OTP_ATTEMPTS_EXHAUSTED", &e.to_string())
        }
        VerifyOtpError::InvalidOtp => ApiResponse::bad_request("INVALID_OTP", &e.to_string()),
        VerifyOtpError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", &e.to_string()),
        VerifyOtpError::InvalidStatus(msg) => ApiResponse::bad_request("INVALID_STATUS", &msg),
        VerifyOtpError::StoreUnavailable(msg) => {
            tracing::error!("OTP store unavailable: {}", msg);
            ApiResponse::service_unavailable("OTP_STORE_UNAVAILABLE", "Please try again shortly")
        }
        VerifyOtpError::RepositoryError(msg) => {
            tracing::error!("Verify OTP failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::OtpPurpose;
    use crate::modules::auth::application::ports::incoming::use_cases::{
        AuthTokens, SignInResult, SignInWithOtpUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    struct MockSignIn {
        result: Result<SignInResult, SignInWithOtpError>,
    }

    #[async_trait]
    impl SignInWithOtpUseCase for MockSignIn {
        async fn execute(
            &self,
            _command: VerifyOtpCommand,
        ) -> Result<SignInResult, SignInWithOtpError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockSignIn, otp: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_sign_in(mock).build();
        let app =
            test::init_service(App::new().app_data(state).service(verify_otp_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/verify-otp")
            .set_json(json!({ "email": "alice@example.com", "otp": otp }))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_verify_otp_returns_tokens() {
        let resp = call(
            MockSignIn {
                result: Ok(SignInResult {
                    user_id: Uuid::new_v4(),
                    purpose: OtpPurpose::Register,
                    message: "Email verified successfully.".to_string(),
                    tokens: AuthTokens {
                        access_token: "access".to_string(),
                        refresh_token: "refresh".to_string(),
                        token_type: "Bearer".to_string(),
                        expires_in: 604800,
                    },
                }),
            },
            "123456",
        )
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["accessToken"], "access");
        assert_eq!(body["data"]["refreshToken"], "refresh");
        assert_eq!(body["data"]["message"], "Email verified successfully.");
    }

    #[actix_web::test]
    async fn test_verify_otp_malformed_code() {
        let resp = call(
            MockSignIn {
                result: Err(VerifyOtpError::InvalidOtp.into()),
            },
            "12ab56",
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_verify_otp_missing_is_not_found() {
        let resp = call(
            MockSignIn {
                result: Err(VerifyOtpError::NotFound.into()),
            },
            "123456",
        )
        .await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_verify_otp_too_many_attempts() {
        let resp = call(
            MockSignIn {
                result: Err(VerifyOtpError::TooManyAttempts.into()),
            },
            "123456",
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "Too many failed attempts. Request a new OTP."
        );
    }

    #[actix_web::test]
    async fn test_verify_otp_store_down() {
        let resp = call(
            MockSignIn {
                result: Err(VerifyOtpError::StoreUnavailable("refused".into()).into()),
            },
            "123456",
        )
        .await;

        assert_eq!(resp.status(), 503);
    }
}
