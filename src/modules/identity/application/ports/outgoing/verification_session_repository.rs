use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::identity::application::domain::{
    NewVerificationSession, SessionStatus, VerificationSession,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationSessionRepositoryError {
    #[error("Verification session not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VerificationSessionRepository: Send + Sync {
    async fn create(
        &self,
        session: NewVerificationSession,
    ) -> Result<VerificationSession, VerificationSessionRepositoryError>;

    async fn find_by_verification_id(
        &self,
        verification_id: &str,
    ) -> Result<Option<VerificationSession>, VerificationSessionRepositoryError>;

    async fn update_status(
        &self,
        verification_id: &str,
        status: SessionStatus,
    ) -> Result<(), VerificationSessionRepositoryError>;

    async fn delete(&self, verification_id: &str) -> Result<(), VerificationSessionRepositoryError>;

    /// Drops the user's sessions that never completed.
    async fn delete_incomplete_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<u64, VerificationSessionRepositoryError>;

    async fn delete_created_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, VerificationSessionRepositoryError>;
}
