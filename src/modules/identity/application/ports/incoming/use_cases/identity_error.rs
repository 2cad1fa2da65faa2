use crate::modules::identity::application::ports::outgoing::{
    IdentityLedgerError, ProviderError, UserVerificationRepositoryError,
    VerificationSessionRepositoryError,
};
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;

/// Failures shared by every step of the identity-verification flow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityVerificationError {
    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    InvalidStatus(String),

    #[error("Please select your country first")]
    CountryNotSelected,

    #[error("Mobile number is required for DigiLocker verification")]
    MobileNumberRequired,

    #[error("Invalid verification session")]
    InvalidSession,

    #[error("Verification session not found")]
    SessionNotFound,

    #[error("DigiLocker authentication not completed. Please complete the flow first.")]
    NotAuthenticated,

    #[error("userProvidedData is required for DigiLocker verification")]
    DeclaredDataRequired,

    #[error("Data mismatch. Mismatched fields: {0}")]
    DataMismatch(String),

    #[error("This DigiLocker account is already verified by another user")]
    AccountAlreadyVerified,

    #[error("Provider account ID not available. Please restart verification.")]
    MissingAccountId,

    #[error("{0}")]
    ProviderNotConfigured(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProviderError> for IdentityVerificationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(_) => {
                IdentityVerificationError::ProviderNotConfigured(err.to_string())
            }
            _ => IdentityVerificationError::Upstream(err.to_string()),
        }
    }
}

impl From<VerificationSessionRepositoryError> for IdentityVerificationError {
    fn from(err: VerificationSessionRepositoryError) -> Self {
        match err {
            VerificationSessionRepositoryError::NotFound => {
                IdentityVerificationError::SessionNotFound
            }
            VerificationSessionRepositoryError::DatabaseError(msg) => {
                IdentityVerificationError::RepositoryError(msg)
            }
        }
    }
}

impl From<UserVerificationRepositoryError> for IdentityVerificationError {
    fn from(err: UserVerificationRepositoryError) -> Self {
        match err {
            UserVerificationRepositoryError::ProviderAccountTaken => {
                IdentityVerificationError::AccountAlreadyVerified
            }
            other => IdentityVerificationError::RepositoryError(other.to_string()),
        }
    }
}

impl From<TransitionFailure> for IdentityVerificationError {
    fn from(err: TransitionFailure) -> Self {
        match err {
            TransitionFailure::UserNotFound => IdentityVerificationError::UserNotFound,
            TransitionFailure::Guard(guard) => {
                IdentityVerificationError::InvalidStatus(guard.to_string())
            }
            TransitionFailure::RepositoryError(msg) => {
                IdentityVerificationError::RepositoryError(msg)
            }
        }
    }
}

impl From<IdentityLedgerError> for IdentityVerificationError {
    fn from(err: IdentityLedgerError) -> Self {
        match err {
            IdentityLedgerError::ProviderAccountTaken => {
                IdentityVerificationError::AccountAlreadyVerified
            }
            IdentityLedgerError::Transition(failure) => failure.into(),
            IdentityLedgerError::DatabaseError(msg) => {
                IdentityVerificationError::RepositoryError(msg)
            }
        }
    }
}
