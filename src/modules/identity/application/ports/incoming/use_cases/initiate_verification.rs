use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::identity_error::IdentityVerificationError;
use crate::modules::identity::application::domain::FlowType;
use crate::modules::onboarding::application::domain::VerificationMethod;

#[derive(Debug, Clone)]
pub struct InitiateVerificationCommand {
    user_id: Uuid,
    mobile_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InitiateVerificationCommandError {
    #[error("Mobile number must be 10 digits")]
    InvalidMobileNumber,
}

impl InitiateVerificationCommand {
    pub fn new(
        user_id: Uuid,
        mobile_number: Option<String>,
    ) -> Result<Self, InitiateVerificationCommandError> {
        let mobile_number = mobile_number
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        if let Some(mobile) = &mobile_number {
            if mobile.len() != 10 || !mobile.chars().all(|c| c.is_ascii_digit()) {
                return Err(InitiateVerificationCommandError::InvalidMobileNumber);
            }
        }

        Ok(Self {
            user_id,
            mobile_number,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn mobile_number(&self) -> Option<&str> {
        self.mobile_number.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationInitiation {
    pub method: VerificationMethod,
    pub already_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_type: Option<FlowType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_exists: Option<bool>,
    pub message: String,
}

#[async_trait]
pub trait InitiateVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: InitiateVerificationCommand,
    ) -> Result<VerificationInitiation, IdentityVerificationError>;
}
