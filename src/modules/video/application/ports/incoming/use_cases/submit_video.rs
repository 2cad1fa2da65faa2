use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;
use crate::modules::video::application::domain::VideoStatus;
use crate::modules::video::application::ports::outgoing::VideoSubmissionRepositoryError;

#[derive(Debug, Clone)]
pub struct SubmitVideoCommand {
    user_id: Uuid,
    photo_url: String,
    video_url: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitVideoCommandError {
    #[error("Both photo and video URLs are required")]
    MissingUrls,
}

impl SubmitVideoCommand {
    pub fn new(
        user_id: Uuid,
        photo_url: Option<String>,
        video_url: Option<String>,
    ) -> Result<Self, SubmitVideoCommandError> {
        let clean = |url: Option<String>| url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());

        match (clean(photo_url), clean(video_url)) {
            (Some(photo_url), Some(video_url)) => Ok(Self {
                user_id,
                photo_url,
                video_url,
            }),
            _ => Err(SubmitVideoCommandError::MissingUrls),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSubmissionOutcome {
    pub already_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VideoStatus>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VideoVerificationError {
    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    InvalidStatus(String),

    #[error("No video verification found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<VideoSubmissionRepositoryError> for VideoVerificationError {
    fn from(err: VideoSubmissionRepositoryError) -> Self {
        match err {
            VideoSubmissionRepositoryError::DatabaseError(msg) => {
                VideoVerificationError::RepositoryError(msg)
            }
        }
    }
}

impl From<TransitionFailure> for VideoVerificationError {
    fn from(err: TransitionFailure) -> Self {
        match err {
            TransitionFailure::UserNotFound => VideoVerificationError::UserNotFound,
            TransitionFailure::Guard(guard) => VideoVerificationError::InvalidStatus(guard.to_string()),
            TransitionFailure::RepositoryError(msg) => VideoVerificationError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait SubmitVideoUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitVideoCommand,
    ) -> Result<VideoSubmissionOutcome, VideoVerificationError>;
}
