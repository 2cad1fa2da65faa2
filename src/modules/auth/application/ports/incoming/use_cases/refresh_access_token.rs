use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct RefreshAccessTokenCommand {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshAccessTokenCommandError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshAccessTokenCommand {
    pub fn new(refresh_token: String) -> Result<Self, RefreshAccessTokenCommandError> {
        let refresh_token = refresh_token.trim().to_string();
        if refresh_token.is_empty() {
            return Err(RefreshAccessTokenCommandError::EmptyToken);
        }
        Ok(Self { refresh_token })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedAccessToken {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshAccessTokenError {
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RefreshAccessTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RefreshAccessTokenCommand,
    ) -> Result<RefreshedAccessToken, RefreshAccessTokenError>;
}
