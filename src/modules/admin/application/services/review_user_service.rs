use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::admin::application::domain::ReviewDecision;
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, ApproveUserUseCase, RejectUserCommand, RejectUserUseCase,
};
use crate::modules::email::application::ports::outgoing::OnboardingNotifier;
use crate::modules::email::application::services::spawn_notification;
use crate::modules::identity::application::ports::outgoing::{IdentityLedger, RejectionOutcome};
use crate::modules::onboarding::application::domain::Transition;
use crate::modules::onboarding::application::ports::incoming::use_cases::OnboardingStateMachine;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

pub struct ApproveUserService {
    state_machine: Arc<dyn OnboardingStateMachine>,
    notifier: Arc<dyn OnboardingNotifier>,
}

impl ApproveUserService {
    pub fn new(
        state_machine: Arc<dyn OnboardingStateMachine>,
        notifier: Arc<dyn OnboardingNotifier>,
    ) -> Self {
        Self {
            state_machine,
            notifier,
        }
    }
}

#[async_trait]
impl ApproveUserUseCase for ApproveUserService {
    async fn execute(&self, user_id: Uuid) -> Result<ReviewDecision, AdminError> {
        let user = self
            .state_machine
            .transition(user_id, Transition::Approve)
            .await?;

        info!(user_id = %user.id, "User approved");

        let notifier = Arc::clone(&self.notifier);
        let (email, username) = (user.email.clone(), user.username.clone());
        spawn_notification("verification_approved", async move {
            notifier.verification_approved(&email, &username).await
        });

        Ok(ReviewDecision {
            user_id: user.id,
            status: user.status,
            message: "User approved successfully".to_string(),
        })
    }
}

/// Sends a reviewed user back to the start of onboarding and records why.
pub struct RejectUserService {
    ledger: Arc<dyn IdentityLedger>,
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn OnboardingNotifier>,
}

impl RejectUserService {
    pub fn new(
        ledger: Arc<dyn IdentityLedger>,
        users: Arc<dyn UserRepository>,
        notifier: Arc<dyn OnboardingNotifier>,
    ) -> Self {
        Self {
            ledger,
            users,
            notifier,
        }
    }
}

#[async_trait]
impl RejectUserUseCase for RejectUserService {
    async fn execute(&self, command: RejectUserCommand) -> Result<ReviewDecision, AdminError> {
        let user = self
            .users
            .find_by_id(command.user_id())
            .await?
            .ok_or(AdminError::UserNotFound)?;

        Transition::Reject
            .apply(user.status)
            .map_err(|e| AdminError::InvalidStatus(e.to_string()))?;

        let outcome = self
            .ledger
            .record_rejection(user.id, command.reason())
            .await?;
        if outcome == RejectionOutcome::NoVerificationRecord {
            warn!(user_id = %user.id, "Rejected user has no identity verification record");
        }

        info!(user_id = %user.id, "User rejected");

        let notifier = Arc::clone(&self.notifier);
        let reason = command.reason().to_string();
        let (email, username) = (user.email.clone(), user.username.clone());
        spawn_notification("verification_rejected", async move {
            notifier
                .verification_rejected(&email, &username, &reason)
                .await
        });

        Ok(ReviewDecision {
            user_id: user.id,
            status: Transition::Reject.to_status(),
            message: "User rejected and can reapply after fixing issues".to_string(),
        })
    }
}
