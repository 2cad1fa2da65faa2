use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OtpAuditError {
    #[error("{0}")]
    Transition(TransitionFailure),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OtpAuditRepository: Send + Sync {
    /// Records the redeemed registration code and moves the user from
    /// REGISTERED to EMAIL_VERIFIED. Both writes commit together or not at all.
    async fn confirm_registration(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
        attempts: u32,
    ) -> Result<(), OtpAuditError>;
}
