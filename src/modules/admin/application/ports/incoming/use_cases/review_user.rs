use async_trait::async_trait;
use uuid::Uuid;

use super::AdminError;
use crate::modules::admin::application::domain::ReviewDecision;

#[async_trait]
pub trait ApproveUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<ReviewDecision, AdminError>;
}

#[derive(Debug, Clone)]
pub struct RejectUserCommand {
    user_id: Uuid,
    reason: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RejectUserCommandError {
    #[error("Rejection reason is required")]
    MissingReason,

    #[error("Rejection reason must be at most 500 characters")]
    ReasonTooLong,
}

impl RejectUserCommand {
    pub fn new(user_id: Uuid, reason: Option<String>) -> Result<Self, RejectUserCommandError> {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or(RejectUserCommandError::MissingReason)?;

        if reason.chars().count() > 500 {
            return Err(RejectUserCommandError::ReasonTooLong);
        }

        Ok(Self { user_id, reason })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[async_trait]
pub trait RejectUserUseCase: Send + Sync {
    async fn execute(&self, command: RejectUserCommand) -> Result<ReviewDecision, AdminError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_is_required() {
        assert_eq!(
            RejectUserCommand::new(Uuid::new_v4(), None).unwrap_err(),
            RejectUserCommandError::MissingReason
        );
        assert_eq!(
            RejectUserCommand::new(Uuid::new_v4(), Some("   ".to_string())).unwrap_err(),
            RejectUserCommandError::MissingReason
        );
    }

    #[test]
    fn overly_long_reason_is_refused() {
        assert_eq!(
            RejectUserCommand::new(Uuid::new_v4(), Some("x".repeat(501))).unwrap_err(),
            RejectUserCommandError::ReasonTooLong
        );
    }

    #[test]
    fn reason_is_trimmed() {
        let cmd = RejectUserCommand::new(Uuid::new_v4(), Some(" Blurry video ".to_string()))
            .unwrap();
        assert_eq!(cmd.reason(), "Blurry video");
    }
}
