use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::CountryRoutes;
use crate::modules::onboarding::application::ports::incoming::use_cases::{
    GetOnboardingStatusError, GetOnboardingStatusUseCase, OnboardingDetails, OnboardingProgress,
};
use crate::modules::onboarding::application::ports::outgoing::{
    OnboardingDetailsQuery, UserRepository,
};

#[derive(Debug, Clone)]
pub struct GetOnboardingStatusService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: OnboardingDetailsQuery + Send + Sync,
{
    users: R,
    details: Q,
    routes: CountryRoutes,
}

impl<R, Q> GetOnboardingStatusService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: OnboardingDetailsQuery + Send + Sync,
{
    pub fn new(users: R, details: Q, routes: CountryRoutes) -> Self {
        Self {
            users,
            details,
            routes,
        }
    }
}

#[async_trait]
impl<R, Q> GetOnboardingStatusUseCase for GetOnboardingStatusService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: OnboardingDetailsQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<OnboardingProgress, GetOnboardingStatusError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| GetOnboardingStatusError::RepositoryError(e.to_string()))?
            .ok_or(GetOnboardingStatusError::UserNotFound)?;

        let verification = self
            .details
            .verification_summary(user_id)
            .await
            .map_err(|e| GetOnboardingStatusError::RepositoryError(e.to_string()))?;
        let subscription = self
            .details
            .subscription_summary(user_id)
            .await
            .map_err(|e| GetOnboardingStatusError::RepositoryError(e.to_string()))?;

        let verification_method = user.country.as_deref().map(|c| self.routes.method_for(c));

        Ok(OnboardingProgress {
            status: user.status,
            completed_steps: user.status.completed_steps(),
            next_step: user.status.next_step().to_string(),
            details: OnboardingDetails {
                email: user.email,
                username: user.username,
                country: user.country,
                verification_method,
                verification,
                subscription,
            },
        })
    }
}
