use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::video::application::domain::{NewVideoSubmission, VideoSubmission};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VideoSubmissionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VideoSubmissionRepository: Send + Sync {
    /// One submission per user; a resubmission replaces the earlier one.
    async fn save(
        &self,
        submission: NewVideoSubmission,
    ) -> Result<VideoSubmission, VideoSubmissionRepositoryError>;

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VideoSubmission>, VideoSubmissionRepositoryError>;
}
