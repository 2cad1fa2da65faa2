use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IssueTokensError {
    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Issues an access/refresh pair and persists the refresh token.
#[async_trait]
pub trait IssueTokensUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, email: &str) -> Result<AuthTokens, IssueTokensError>;
}
