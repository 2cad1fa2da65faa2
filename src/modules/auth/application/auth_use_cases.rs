use std::sync::Arc;

use super::ports::incoming::use_cases::{
    RefreshAccessTokenUseCase, SendOtpUseCase, SignInWithOtpUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub send_otp: Arc<dyn SendOtpUseCase>,
    pub sign_in: Arc<dyn SignInWithOtpUseCase>,
    pub refresh_token: Arc<dyn RefreshAccessTokenUseCase>,
}
