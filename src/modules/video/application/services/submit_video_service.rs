use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::email::application::ports::outgoing::OnboardingNotifier;
use crate::modules::email::application::services::spawn_notification;
use crate::modules::onboarding::application::domain::{OnboardingStatus, Transition};
use crate::modules::onboarding::application::ports::incoming::use_cases::OnboardingStateMachine;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;
use crate::modules::video::application::domain::{NewVideoSubmission, VideoStatus};
use crate::modules::video::application::ports::incoming::use_cases::{
    SubmitVideoCommand, SubmitVideoUseCase, VideoSubmissionOutcome, VideoVerificationError,
};
use crate::modules::video::application::ports::outgoing::VideoSubmissionRepository;

/// Stores the capture and advances the user. No liveness analysis is run;
/// every complete submission is accepted as verified.
pub struct SubmitVideoService<R>
where
    R: VideoSubmissionRepository,
{
    submissions: R,
    users: Arc<dyn UserRepository>,
    state_machine: Arc<dyn OnboardingStateMachine>,
    notifier: Arc<dyn OnboardingNotifier>,
}

impl<R> SubmitVideoService<R>
where
    R: VideoSubmissionRepository,
{
    pub fn new(
        submissions: R,
        users: Arc<dyn UserRepository>,
        state_machine: Arc<dyn OnboardingStateMachine>,
        notifier: Arc<dyn OnboardingNotifier>,
    ) -> Self {
        Self {
            submissions,
            users,
            state_machine,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitVideoUseCase for SubmitVideoService<R>
where
    R: VideoSubmissionRepository,
{
    async fn execute(
        &self,
        command: SubmitVideoCommand,
    ) -> Result<VideoSubmissionOutcome, VideoVerificationError> {
        let user = self
            .users
            .find_by_id(command.user_id())
            .await
            .map_err(|e| VideoVerificationError::RepositoryError(e.to_string()))?
            .ok_or(VideoVerificationError::UserNotFound)?;

        if user.status >= OnboardingStatus::VideoVerified {
            return Ok(VideoSubmissionOutcome {
                already_verified: true,
                status: None,
                message: "Already verified".to_string(),
            });
        }

        Transition::VerifyVideo
            .apply(user.status)
            .map_err(|e| VideoVerificationError::InvalidStatus(e.to_string()))?;

        let stored = self
            .submissions
            .save(NewVideoSubmission {
                user_id: user.id,
                photo_url: command.photo_url().to_string(),
                video_url: command.video_url().to_string(),
                status: VideoStatus::Verified,
            })
            .await?;

        self.state_machine
            .transition(user.id, Transition::VerifyVideo)
            .await?;

        info!(user_id = %user.id, "Video verification accepted");

        let notifier = Arc::clone(&self.notifier);
        spawn_notification("verification_pending", async move {
            notifier
                .verification_pending(&user.email, &user.username)
                .await
        });

        Ok(VideoSubmissionOutcome {
            already_verified: false,
            status: Some(stored.status),
            message: "Video verification submitted successfully".to_string(),
        })
    }
}
