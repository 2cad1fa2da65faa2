use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::{OnboardingStatus, UserAccount};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("User already exists with this email")]
    EmailTaken,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<UserAccount, UserRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserAccount>, UserRepositoryError>;

    async fn find_by_email(&self, email: &str)
        -> Result<Option<UserAccount>, UserRepositoryError>;

    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError>;

    async fn set_country(
        &self,
        id: Uuid,
        country: &str,
    ) -> Result<UserAccount, UserRepositoryError>;

    /// Writes `next` only while the stored status still equals `expected`.
    /// Returns false when the row moved on in the meantime.
    async fn compare_and_set_status(
        &self,
        id: Uuid,
        expected: OnboardingStatus,
        next: OnboardingStatus,
    ) -> Result<bool, UserRepositoryError>;
}
