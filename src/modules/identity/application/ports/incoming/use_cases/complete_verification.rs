use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::identity_error::IdentityVerificationError;
use crate::modules::identity::application::domain::VerificationStatus;
use crate::modules::onboarding::application::domain::VerificationMethod;
use crate::modules::reconciliation::application::domain::{
    ComparisonReport, IdentityFields, ReconciledField,
};

#[derive(Debug, Clone)]
pub struct CompleteVerificationCommand {
    user_id: Uuid,
    verification_id: String,
    declared: Option<IdentityFields>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompleteVerificationCommandError {
    #[error("verificationId is required")]
    MissingVerificationId,

    #[error("userProvidedData field '{0}' must not be blank")]
    BlankDeclaredField(ReconciledField),
}

impl CompleteVerificationCommand {
    pub fn new(
        user_id: Uuid,
        verification_id: String,
        declared: Option<IdentityFields>,
    ) -> Result<Self, CompleteVerificationCommandError> {
        let verification_id = verification_id.trim().to_string();
        if verification_id.is_empty() {
            return Err(CompleteVerificationCommandError::MissingVerificationId);
        }
        if let Some(field) = declared.as_ref().and_then(IdentityFields::first_blank) {
            return Err(CompleteVerificationCommandError::BlankDeclaredField(field));
        }
        Ok(Self {
            user_id,
            verification_id,
            declared,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn verification_id(&self) -> &str {
        &self.verification_id
    }

    pub fn declared(&self) -> Option<&IdentityFields> {
        self.declared.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCompletion {
    pub verification_id: String,
    pub method: VerificationMethod,
    pub status: VerificationStatus,
    pub verified: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_data: Option<serde_json::Value>,
}

#[async_trait]
pub trait CompleteVerificationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CompleteVerificationCommand,
    ) -> Result<VerificationCompletion, IdentityVerificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared() -> IdentityFields {
        IdentityFields {
            name: "John Doe".to_string(),
            dob: "1990-01-15".to_string(),
            gender: "male".to_string(),
            state: "Tamil Nadu".to_string(),
            pincode: "600001".to_string(),
        }
    }

    #[test]
    fn blank_verification_id_is_rejected() {
        let result = CompleteVerificationCommand::new(Uuid::new_v4(), "  ".to_string(), None);
        assert!(matches!(
            result,
            Err(CompleteVerificationCommandError::MissingVerificationId)
        ));
    }

    #[test]
    fn blank_declared_field_is_rejected() {
        let declared = IdentityFields {
            state: " ".to_string(),
            ..declared()
        };

        let err =
            CompleteVerificationCommand::new(Uuid::new_v4(), "VER_1".to_string(), Some(declared))
                .unwrap_err();

        assert_eq!(
            err,
            CompleteVerificationCommandError::BlankDeclaredField(ReconciledField::State)
        );
        assert_eq!(
            err.to_string(),
            "userProvidedData field 'state' must not be blank"
        );
    }

    #[test]
    fn hosted_flow_needs_no_declared_data() {
        let command =
            CompleteVerificationCommand::new(Uuid::new_v4(), " VER_1 ".to_string(), None).unwrap();

        assert_eq!(command.verification_id(), "VER_1");
        assert!(command.declared().is_none());
    }

    #[test]
    fn complete_declared_data_is_kept() {
        let command = CompleteVerificationCommand::new(
            Uuid::new_v4(),
            "VER_1".to_string(),
            Some(declared()),
        )
        .unwrap();

        assert_eq!(command.declared(), Some(&declared()));
    }
}
