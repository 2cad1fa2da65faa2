use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::application::domain::IdentityVerification;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserVerificationRepositoryError {
    #[error("Identity verification not found")]
    NotFound,

    #[error("Provider account already bound to another user")]
    ProviderAccountTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserVerificationRepository: Send + Sync {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<IdentityVerification>, UserVerificationRepositoryError>;

    async fn find_by_provider_account(
        &self,
        provider_account_id: &str,
    ) -> Result<Option<IdentityVerification>, UserVerificationRepositoryError>;

    /// Inserts or replaces the user's single verification record.
    async fn upsert(
        &self,
        verification: IdentityVerification,
    ) -> Result<IdentityVerification, UserVerificationRepositoryError>;

    async fn mark_rejected(
        &self,
        user_id: Uuid,
        reason: &str,
    ) -> Result<(), UserVerificationRepositoryError>;
}
