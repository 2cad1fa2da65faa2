use crate::modules::admin::application::ports::outgoing::AdminQueryError;
use crate::modules::identity::application::ports::outgoing::IdentityLedgerError;
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;
use crate::modules::onboarding::application::ports::outgoing::{
    OnboardingDetailsQueryError, UserRepositoryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    InvalidStatus(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TransitionFailure> for AdminError {
    fn from(err: TransitionFailure) -> Self {
        match err {
            TransitionFailure::UserNotFound => AdminError::UserNotFound,
            TransitionFailure::Guard(guard) => AdminError::InvalidStatus(guard.to_string()),
            TransitionFailure::RepositoryError(msg) => AdminError::RepositoryError(msg),
        }
    }
}

impl From<AdminQueryError> for AdminError {
    fn from(err: AdminQueryError) -> Self {
        AdminError::RepositoryError(err.to_string())
    }
}

impl From<UserRepositoryError> for AdminError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound => AdminError::UserNotFound,
            other => AdminError::RepositoryError(other.to_string()),
        }
    }
}

impl From<OnboardingDetailsQueryError> for AdminError {
    fn from(err: OnboardingDetailsQueryError) -> Self {
        AdminError::RepositoryError(err.to_string())
    }
}

impl From<IdentityLedgerError> for AdminError {
    fn from(err: IdentityLedgerError) -> Self {
        match err {
            IdentityLedgerError::Transition(failure) => failure.into(),
            other => AdminError::RepositoryError(other.to_string()),
        }
    }
}
