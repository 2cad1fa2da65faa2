use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::VerificationMethod;

#[derive(Debug, Clone)]
pub struct SelectCountryCommand {
    user_id: Uuid,
    country: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectCountryCommandError {
    #[error("Country is required")]
    EmptyCountry,

    #[error("Country name is too long (max 100 characters)")]
    CountryTooLong,
}

impl SelectCountryCommand {
    pub fn new(user_id: Uuid, country: String) -> Result<Self, SelectCountryCommandError> {
        let country = country.trim().to_string();
        if country.is_empty() {
            return Err(SelectCountryCommandError::EmptyCountry);
        }
        if country.chars().count() > 100 {
            return Err(SelectCountryCommandError::CountryTooLong);
        }
        Ok(Self { user_id, country })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountrySelection {
    pub country: String,
    pub verification_method: VerificationMethod,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectCountryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Please verify your email before selecting a country")]
    EmailNotVerified,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SelectCountryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SelectCountryCommand,
    ) -> Result<CountrySelection, SelectCountryError>;
}
