use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::application::domain::IdentityVerification;
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionOutcome {
    Rejected,
    /// The user was moved back but had no verification record to mark.
    NoVerificationRecord,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityLedgerError {
    #[error("Provider account already bound to another user")]
    ProviderAccountTaken,

    #[error("{0}")]
    Transition(TransitionFailure),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Identity writes that move the user's onboarding status. Each call commits
/// all of its rows or none of them.
#[async_trait]
pub trait IdentityLedger: Send + Sync {
    /// Stores the VERIFIED record, drops the finished session and moves the
    /// user from EMAIL_VERIFIED to ID_VERIFIED.
    async fn record_verified(
        &self,
        verification: IdentityVerification,
        verification_id: &str,
    ) -> Result<IdentityVerification, IdentityLedgerError>;

    /// Marks the verification REJECTED and sends the user back to REGISTERED.
    async fn record_rejection(
        &self,
        user_id: Uuid,
        reason: &str,
    ) -> Result<RejectionOutcome, IdentityLedgerError>;
}
