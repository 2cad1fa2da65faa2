use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::{OnboardingStatus, VerificationMethod};
use crate::modules::onboarding::application::ports::outgoing::{
    SubscriptionSummary, VerificationSummary,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingDetails {
    pub email: String,
    pub username: String,
    pub country: Option<String>,
    pub verification_method: Option<VerificationMethod>,
    pub verification: Option<VerificationSummary>,
    pub subscription: Option<SubscriptionSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProgress {
    pub status: OnboardingStatus,
    pub completed_steps: Vec<OnboardingStatus>,
    pub next_step: String,
    pub details: OnboardingDetails,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetOnboardingStatusError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetOnboardingStatusUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<OnboardingProgress, GetOnboardingStatusError>;
}
