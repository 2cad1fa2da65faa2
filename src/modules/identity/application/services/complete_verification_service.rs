use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use super::provider_registry::IdentityProviderRegistry;
use crate::modules::identity::application::domain::{
    IdentityVerification, SessionStatus, VerificationSession, VerificationStatus,
};
use crate::modules::identity::application::ports::incoming::use_cases::{
    CompleteVerificationCommand, CompleteVerificationUseCase, IdentityVerificationError,
    VerificationCompletion,
};
use crate::modules::identity::application::ports::outgoing::{
    IdentityLedger, IdentityProvider, ProviderOutcome, UserVerificationRepository,
    VerificationSessionRepository,
};
use crate::modules::onboarding::application::domain::Transition;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;
use crate::modules::reconciliation::application::domain::{compare, ComparisonReport};

/// Verified result waiting to be persisted.
struct Accepted {
    provider_account_id: String,
    verified_data: serde_json::Value,
    comparison: Option<ComparisonReport>,
}

enum Step {
    Accepted(Accepted),
    Finished(VerificationCompletion),
}

pub struct CompleteVerificationService<S, V>
where
    S: VerificationSessionRepository,
    V: UserVerificationRepository,
{
    sessions: S,
    verifications: V,
    users: Arc<dyn UserRepository>,
    ledger: Arc<dyn IdentityLedger>,
    registry: IdentityProviderRegistry,
}

impl<S, V> CompleteVerificationService<S, V>
where
    S: VerificationSessionRepository,
    V: UserVerificationRepository,
{
    pub fn new(
        sessions: S,
        verifications: V,
        users: Arc<dyn UserRepository>,
        ledger: Arc<dyn IdentityLedger>,
        registry: IdentityProviderRegistry,
    ) -> Self {
        Self {
            sessions,
            verifications,
            users,
            ledger,
            registry,
        }
    }

    async fn reconcile_locker(
        &self,
        provider: &dyn IdentityProvider,
        session: &VerificationSession,
        command: &CompleteVerificationCommand,
    ) -> Result<Accepted, IdentityVerificationError> {
        if session.status != SessionStatus::Authenticated {
            return Err(IdentityVerificationError::NotAuthenticated);
        }
        let declared = command
            .declared()
            .ok_or(IdentityVerificationError::DeclaredDataRequired)?;

        let identity = match provider
            .fetch_verified_data(&session.verification_id)
            .await?
        {
            ProviderOutcome::Verified(identity) => identity,
            ProviderOutcome::Pending | ProviderOutcome::Rejected(_) => {
                return Err(IdentityVerificationError::NotAuthenticated)
            }
        };

        let reconciliation = compare(&identity.fields, declared);
        if !reconciliation.is_match {
            let fields = reconciliation.mismatch_list();
            warn!(
                user_id = %session.user_id,
                verification_id = %session.verification_id,
                mismatched = %fields,
                "Declared identity does not match provider record"
            );
            return Err(IdentityVerificationError::DataMismatch(fields));
        }

        let provider_account_id = session
            .provider_account_id
            .clone()
            .or(identity.provider_account_id)
            .ok_or(IdentityVerificationError::MissingAccountId)?;
        let report = reconciliation.report();

        Ok(Accepted {
            provider_account_id,
            verified_data: json!({
                "provider": identity.raw,
                "declared": declared,
                "comparison": report,
            }),
            comparison: Some(report),
        })
    }

    async fn settle_hosted(
        &self,
        provider: &dyn IdentityProvider,
        session: &VerificationSession,
    ) -> Result<Step, IdentityVerificationError> {
        let outcome = provider
            .fetch_verified_data(&session.verification_id)
            .await?;

        let (status, message, reason) = match outcome {
            ProviderOutcome::Verified(identity) => {
                let provider_account_id = identity
                    .provider_account_id
                    .or_else(|| session.provider_account_id.clone())
                    .unwrap_or_else(|| session.verification_id.clone());
                return Ok(Step::Accepted(Accepted {
                    provider_account_id,
                    verified_data: identity.raw,
                    comparison: None,
                }));
            }
            ProviderOutcome::Pending => (
                VerificationStatus::Pending,
                "Verification is still processing. Please check again later.".to_string(),
                None,
            ),
            ProviderOutcome::Rejected(provider_status) => (
                VerificationStatus::Rejected,
                format!("Verification {}. Please try again.", provider_status),
                Some(provider_status),
            ),
        };

        self.verifications
            .upsert(IdentityVerification {
                user_id: session.user_id,
                method: session.method,
                status,
                provider_account_id: None,
                verified_data: None,
                rejection_reason: reason,
                verified_at: None,
            })
            .await?;

        Ok(Step::Finished(VerificationCompletion {
            verification_id: session.verification_id.clone(),
            method: session.method,
            status,
            verified: false,
            message,
            comparison: None,
            verified_data: None,
        }))
    }
}

#[async_trait]
impl<S, V> CompleteVerificationUseCase for CompleteVerificationService<S, V>
where
    S: VerificationSessionRepository,
    V: UserVerificationRepository,
{
    async fn execute(
        &self,
        command: CompleteVerificationCommand,
    ) -> Result<VerificationCompletion, IdentityVerificationError> {
        let user_id = command.user_id();
        let session = self
            .sessions
            .find_by_verification_id(command.verification_id())
            .await?
            .filter(|s| s.belongs_to(user_id))
            .ok_or(IdentityVerificationError::InvalidSession)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| IdentityVerificationError::RepositoryError(e.to_string()))?
            .ok_or(IdentityVerificationError::UserNotFound)?;
        Transition::VerifyIdentity
            .apply(user.status)
            .map_err(|e| IdentityVerificationError::InvalidStatus(e.to_string()))?;

        let provider = self.registry.for_method(session.method)?;

        let accepted = if provider.requires_declared_data() {
            self.reconcile_locker(provider.as_ref(), &session, &command)
                .await?
        } else {
            match self.settle_hosted(provider.as_ref(), &session).await? {
                Step::Accepted(accepted) => accepted,
                Step::Finished(completion) => return Ok(completion),
            }
        };

        if let Some(holder) = self
            .verifications
            .find_by_provider_account(&accepted.provider_account_id)
            .await?
        {
            if holder.claimed_by_other(user_id) {
                return Err(IdentityVerificationError::AccountAlreadyVerified);
            }
        }

        let stored = self
            .ledger
            .record_verified(
                IdentityVerification {
                    user_id,
                    method: session.method,
                    status: VerificationStatus::Verified,
                    provider_account_id: Some(accepted.provider_account_id),
                    verified_data: Some(accepted.verified_data),
                    rejection_reason: None,
                    verified_at: Some(Utc::now()),
                },
                &session.verification_id,
            )
            .await?;

        info!(
            user_id = %user_id,
            method = %session.method,
            "Identity verified"
        );

        Ok(VerificationCompletion {
            verification_id: session.verification_id,
            method: stored.method,
            status: VerificationStatus::Verified,
            verified: true,
            message: "Identity verified successfully".to_string(),
            comparison: accepted.comparison,
            verified_data: stored.verified_data,
        })
    }
}
