use async_trait::async_trait;
use tracing::info;

use crate::modules::onboarding::application::domain::{CountryRoutes, OnboardingStatus};
use crate::modules::onboarding::application::ports::incoming::use_cases::{
    CountrySelection, SelectCountryCommand, SelectCountryError, SelectCountryUseCase,
};
use crate::modules::onboarding::application::ports::outgoing::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct SelectCountryService<R>
where
    R: UserRepository + Send + Sync,
{
    users: R,
    routes: CountryRoutes,
}

impl<R> SelectCountryService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(users: R, routes: CountryRoutes) -> Self {
        Self { users, routes }
    }
}

#[async_trait]
impl<R> SelectCountryUseCase for SelectCountryService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SelectCountryCommand,
    ) -> Result<CountrySelection, SelectCountryError> {
        let user = self
            .users
            .find_by_id(command.user_id())
            .await
            .map_err(|e| SelectCountryError::RepositoryError(e.to_string()))?
            .ok_or(SelectCountryError::UserNotFound)?;

        if user.status != OnboardingStatus::EmailVerified {
            return Err(SelectCountryError::EmailNotVerified);
        }

        let updated = self
            .users
            .set_country(user.id, command.country())
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => SelectCountryError::UserNotFound,
                other => SelectCountryError::RepositoryError(other.to_string()),
            })?;

        let method = self.routes.method_for(command.country());
        info!(user_id = %user.id, method = %method, "Country selected");

        Ok(CountrySelection {
            message: format!(
                "Country selected: {}. Next step: {} verification.",
                command.country(),
                method
            ),
            country: updated.country.unwrap_or_else(|| command.country().to_string()),
            verification_method: method,
        })
    }
}
