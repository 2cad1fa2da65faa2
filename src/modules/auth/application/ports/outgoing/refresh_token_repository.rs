use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshTokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persisted refresh tokens, stored only as SHA-256 hashes.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn store(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RefreshTokenRepositoryError>;

    async fn is_active(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, RefreshTokenRepositoryError>;
}
