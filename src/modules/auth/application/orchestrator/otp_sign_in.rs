use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::OtpPurpose;
use crate::modules::auth::application::ports::incoming::use_cases::{
    IssueTokensUseCase, SignInResult, SignInWithOtpError, SignInWithOtpUseCase, VerifyOtpCommand,
    VerifyOtpUseCase,
};

#[derive(Clone)]
pub struct OtpSignInOrchestrator {
    verify_otp: Arc<dyn VerifyOtpUseCase>,
    issue_tokens: Arc<dyn IssueTokensUseCase>,
}

impl OtpSignInOrchestrator {
    pub fn new(
        verify_otp: Arc<dyn VerifyOtpUseCase>,
        issue_tokens: Arc<dyn IssueTokensUseCase>,
    ) -> Self {
        Self {
            verify_otp,
            issue_tokens,
        }
    }
}

#[async_trait]
impl SignInWithOtpUseCase for OtpSignInOrchestrator {
    /// 1. Redeems the OTP (advancing a new registration to EMAIL_VERIFIED)
    /// 2. Issues the access/refresh pair
    async fn execute(&self, command: VerifyOtpCommand) -> Result<SignInResult, SignInWithOtpError> {
        let verified = self.verify_otp.execute(command).await?;

        let tokens = self
            .issue_tokens
            .execute(verified.user_id, &verified.email)
            .await?;

        let message = match verified.purpose {
            OtpPurpose::Register => "Email verified successfully.",
            OtpPurpose::Login => "Login successful",
        };

        Ok(SignInResult {
            user_id: verified.user_id,
            purpose: verified.purpose,
            message: message.to_string(),
            tokens,
        })
    }
}
