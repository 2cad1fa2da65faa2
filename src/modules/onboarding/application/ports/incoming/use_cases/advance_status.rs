use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::{Transition, TransitionError, UserAccount};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionFailure {
    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    Guard(TransitionError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The single authority over `UserAccount::status`.
#[async_trait]
pub trait OnboardingStateMachine: Send + Sync {
    async fn transition(
        &self,
        user_id: Uuid,
        transition: Transition,
    ) -> Result<UserAccount, TransitionFailure>;
}
