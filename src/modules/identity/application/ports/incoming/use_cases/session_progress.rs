use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::identity_error::IdentityVerificationError;
use crate::modules::identity::application::domain::SessionStatus;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionProgress {
    pub verification_id: String,
    pub status: SessionStatus,
    pub ready_for_comparison: bool,
}

impl SessionProgress {
    pub fn new(verification_id: impl Into<String>, status: SessionStatus) -> Self {
        Self {
            verification_id: verification_id.into(),
            status,
            ready_for_comparison: status == SessionStatus::Authenticated,
        }
    }
}

/// Callback after the consent redirect. Provider failures propagate.
#[async_trait]
pub trait AwaitAuthenticationUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        verification_id: &str,
    ) -> Result<SessionProgress, IdentityVerificationError>;
}

/// Polling endpoint. Provider failures are logged and the stored status returned.
#[async_trait]
pub trait SessionStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        verification_id: &str,
    ) -> Result<SessionProgress, IdentityVerificationError>;
}
