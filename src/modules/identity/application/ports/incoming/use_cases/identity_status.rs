use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::identity_error::IdentityVerificationError;
use crate::modules::identity::application::domain::VerificationStatus;
use crate::modules::onboarding::application::domain::VerificationMethod;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityStatus {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<VerificationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VerificationStatus>,
}

#[async_trait]
pub trait IdentityStatusUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<IdentityStatus, IdentityVerificationError>;
}
