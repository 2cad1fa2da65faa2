use async_trait::async_trait;
use uuid::Uuid;

use super::submit_video::VideoVerificationError;
use crate::modules::video::application::domain::VideoSubmission;

#[async_trait]
pub trait VideoStatusUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<VideoSubmission, VideoVerificationError>;
}
