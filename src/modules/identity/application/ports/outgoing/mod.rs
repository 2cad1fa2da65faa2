pub mod identity_ledger;
pub mod identity_provider;
pub mod user_verification_repository;
pub mod verification_session_repository;

pub use identity_ledger::{IdentityLedger, IdentityLedgerError, RejectionOutcome};
pub use identity_provider::{
    AuthenticationState, IdentityProvider, ProviderError, ProviderOutcome, ProviderSession,
    StartSessionRequest, VerifiedIdentity,
};
pub use user_verification_repository::{
    UserVerificationRepository, UserVerificationRepositoryError,
};
pub use verification_session_repository::{
    VerificationSessionRepository, VerificationSessionRepositoryError,
};
