use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::video::application::domain::VideoSubmission;
use crate::modules::video::application::ports::incoming::use_cases::{
    VideoStatusUseCase, VideoVerificationError,
};
use crate::modules::video::application::ports::outgoing::VideoSubmissionRepository;

pub struct VideoStatusService<R>
where
    R: VideoSubmissionRepository,
{
    submissions: R,
}

impl<R> VideoStatusService<R>
where
    R: VideoSubmissionRepository,
{
    pub fn new(submissions: R) -> Self {
        Self { submissions }
    }
}

#[async_trait]
impl<R> VideoStatusUseCase for VideoStatusService<R>
where
    R: VideoSubmissionRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<VideoSubmission, VideoVerificationError> {
        self.submissions
            .find_by_user(user_id)
            .await?
            .ok_or(VideoVerificationError::NotFound)
    }
}
