use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::token_hasher::hash_token;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthTokens, IssueTokensError, IssueTokensUseCase,
};
use crate::modules::auth::application::ports::outgoing::{RefreshTokenRepository, TokenProvider};

#[derive(Clone)]
pub struct IssueTokensService<R>
where
    R: RefreshTokenRepository + Send + Sync,
{
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    refresh_tokens: R,
}

impl<R> IssueTokensService<R>
where
    R: RefreshTokenRepository + Send + Sync,
{
    pub fn new(tokens: Arc<dyn TokenProvider + Send + Sync>, refresh_tokens: R) -> Self {
        Self {
            tokens,
            refresh_tokens,
        }
    }
}

#[async_trait]
impl<R> IssueTokensUseCase for IssueTokensService<R>
where
    R: RefreshTokenRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, email: &str) -> Result<AuthTokens, IssueTokensError> {
        let access_token = self
            .tokens
            .generate_access_token(user_id, email)
            .map_err(|e| IssueTokensError::TokenGeneration(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(user_id, email)
            .map_err(|e| IssueTokensError::TokenGeneration(e.to_string()))?;

        let expires_at = Utc::now() + self.tokens.refresh_token_lifetime();
        self.refresh_tokens
            .store(user_id, &hash_token(&refresh_token), expires_at)
            .await
            .map_err(|e| IssueTokensError::RepositoryError(e.to_string()))?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.access_token_lifetime().num_seconds(),
        })
    }
}
