use async_trait::async_trait;
use serde::Serialize;

use super::identity_error::IdentityVerificationError;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionCleanup {
    pub deleted: u64,
}

#[async_trait]
pub trait CleanupExpiredSessionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SessionCleanup, IdentityVerificationError>;
}
