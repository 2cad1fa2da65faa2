use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::domain::UserDetails;
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, UserDetailsUseCase,
};
use crate::modules::onboarding::application::ports::outgoing::{
    OnboardingDetailsQuery, UserRepository,
};

pub struct UserDetailsService {
    users: Arc<dyn UserRepository>,
    details: Arc<dyn OnboardingDetailsQuery>,
}

impl UserDetailsService {
    pub fn new(users: Arc<dyn UserRepository>, details: Arc<dyn OnboardingDetailsQuery>) -> Self {
        Self { users, details }
    }
}

#[async_trait]
impl UserDetailsUseCase for UserDetailsService {
    async fn execute(&self, user_id: Uuid) -> Result<UserDetails, AdminError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AdminError::UserNotFound)?;

        let verification = self.details.verification_summary(user_id).await?;
        let subscription = self.details.subscription_summary(user_id).await?;

        Ok(UserDetails::new(user, verification, subscription))
    }
}
