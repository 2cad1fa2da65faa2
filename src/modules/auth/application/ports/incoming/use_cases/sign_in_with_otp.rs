use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::issue_tokens::{AuthTokens, IssueTokensError};
use super::verify_otp::{VerifyOtpCommand, VerifyOtpError};
use crate::modules::auth::application::domain::OtpPurpose;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignInResult {
    pub user_id: Uuid,
    pub purpose: OtpPurpose,
    pub message: String,
    #[serde(flatten)]
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignInWithOtpError {
    #[error(transparent)]
    Verify(#[from] VerifyOtpError),

    #[error(transparent)]
    Tokens(#[from] IssueTokensError),
}

/// Verifies the OTP and, on success, issues the token pair.
#[async_trait]
pub trait SignInWithOtpUseCase: Send + Sync {
    async fn execute(&self, command: VerifyOtpCommand) -> Result<SignInResult, SignInWithOtpError>;
}
