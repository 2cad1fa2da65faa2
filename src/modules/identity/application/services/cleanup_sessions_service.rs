use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

use crate::modules::identity::application::domain::SESSION_TTL_HOURS;
use crate::modules::identity::application::ports::incoming::use_cases::{
    CleanupExpiredSessionsUseCase, IdentityVerificationError, SessionCleanup,
};
use crate::modules::identity::application::ports::outgoing::VerificationSessionRepository;

/// Deletes verification sessions older than the session lifetime.
pub struct CleanupExpiredSessionsService<S>
where
    S: VerificationSessionRepository,
{
    sessions: S,
}

impl<S> CleanupExpiredSessionsService<S>
where
    S: VerificationSessionRepository,
{
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl<S> CleanupExpiredSessionsUseCase for CleanupExpiredSessionsService<S>
where
    S: VerificationSessionRepository,
{
    async fn execute(&self) -> Result<SessionCleanup, IdentityVerificationError> {
        let cutoff = Utc::now() - Duration::hours(SESSION_TTL_HOURS);
        let deleted = self.sessions.delete_created_before(cutoff).await?;

        info!(deleted, cutoff = %cutoff, "Expired verification sessions removed");

        Ok(SessionCleanup { deleted })
    }
}
