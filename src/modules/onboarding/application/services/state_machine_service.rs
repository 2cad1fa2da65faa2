use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::onboarding::application::domain::{Transition, UserAccount};
use crate::modules::onboarding::application::ports::incoming::use_cases::{
    OnboardingStateMachine, TransitionFailure,
};
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone)]
pub struct OnboardingStateMachineService<R>
where
    R: UserRepository + Send + Sync,
{
    users: R,
}

impl<R> OnboardingStateMachineService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }

    async fn load(&self, user_id: Uuid) -> Result<UserAccount, TransitionFailure> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(|e| TransitionFailure::RepositoryError(e.to_string()))?
            .ok_or(TransitionFailure::UserNotFound)
    }
}

#[async_trait]
impl<R> OnboardingStateMachine for OnboardingStateMachineService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn transition(
        &self,
        user_id: Uuid,
        transition: Transition,
    ) -> Result<UserAccount, TransitionFailure> {
        let user = self.load(user_id).await?;
        let next = transition
            .apply(user.status)
            .map_err(TransitionFailure::Guard)?;

        let written = self
            .users
            .compare_and_set_status(user_id, user.status, next)
            .await
            .map_err(|e| TransitionFailure::RepositoryError(e.to_string()))?;

        if !written {
            // Another request moved the user first; report against the status that won.
            let current = self.load(user_id).await?;
            warn!(
                user_id = %user_id,
                expected = %user.status,
                actual = %current.status,
                "Concurrent onboarding status update"
            );
            return match transition.apply(current.status) {
                Err(guard) => Err(TransitionFailure::Guard(guard)),
                Ok(_) => Err(TransitionFailure::RepositoryError(
                    "Status changed concurrently".to_string(),
                )),
            };
        }

        info!(
            user_id = %user_id,
            from = %user.status,
            to = %next,
            "Onboarding status advanced"
        );

        Ok(UserAccount {
            status: next,
            ..user
        })
    }
}
