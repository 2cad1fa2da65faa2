use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::provider_registry::IdentityProviderRegistry;
use crate::modules::identity::application::domain::{
    generate_verification_id, FlowType, NewVerificationSession,
};
use crate::modules::identity::application::ports::incoming::use_cases::{
    IdentityVerificationError, InitiateVerificationCommand, InitiateVerificationUseCase,
    VerificationInitiation,
};
use crate::modules::identity::application::ports::outgoing::{
    StartSessionRequest, UserVerificationRepository, VerificationSessionRepository,
};
use crate::modules::onboarding::application::domain::{OnboardingStatus, Transition};
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

pub struct InitiateVerificationService<S, V>
where
    S: VerificationSessionRepository,
    V: UserVerificationRepository,
{
    sessions: S,
    verifications: V,
    users: Arc<dyn UserRepository>,
    registry: IdentityProviderRegistry,
}

impl<S, V> InitiateVerificationService<S, V>
where
    S: VerificationSessionRepository,
    V: UserVerificationRepository,
{
    pub fn new(
        sessions: S,
        verifications: V,
        users: Arc<dyn UserRepository>,
        registry: IdentityProviderRegistry,
    ) -> Self {
        Self {
            sessions,
            verifications,
            users,
            registry,
        }
    }
}

fn initiation_message(flow_type: Option<FlowType>) -> &'static str {
    match flow_type {
        Some(FlowType::Signin) => "DigiLocker account found. Please complete verification.",
        Some(FlowType::Signup) => {
            "New DigiLocker account will be created. Please complete signup."
        }
        None => "Verification session created. Please complete verification with the provider.",
    }
}

#[async_trait]
impl<S, V> InitiateVerificationUseCase for InitiateVerificationService<S, V>
where
    S: VerificationSessionRepository,
    V: UserVerificationRepository,
{
    async fn execute(
        &self,
        command: InitiateVerificationCommand,
    ) -> Result<VerificationInitiation, IdentityVerificationError> {
        let user_id = command.user_id();
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| IdentityVerificationError::RepositoryError(e.to_string()))?
            .ok_or(IdentityVerificationError::UserNotFound)?;

        // A VERIFIED record only counts once the user has actually moved past EMAIL_VERIFIED.
        if user.status > OnboardingStatus::EmailVerified {
            if let Some(existing) = self.verifications.find_by_user(user_id).await? {
                if existing.is_verified() {
                    return Ok(VerificationInitiation {
                        method: existing.method,
                        already_verified: true,
                        verification_id: None,
                        redirect_url: None,
                        client_secret: None,
                        flow_type: None,
                        account_exists: None,
                        message: "User already verified".to_string(),
                    });
                }
            }
        }

        Transition::VerifyIdentity
            .apply(user.status)
            .map_err(|e| IdentityVerificationError::InvalidStatus(e.to_string()))?;

        let country = user
            .country
            .as_deref()
            .ok_or(IdentityVerificationError::CountryNotSelected)?;
        let provider = self.registry.for_country(country)?;

        let mobile_number = command.mobile_number();
        if provider.requires_mobile_number() && mobile_number.is_none() {
            return Err(IdentityVerificationError::MobileNumberRequired);
        }

        let cleared = self.sessions.delete_incomplete_for_user(user_id).await?;
        if cleared > 0 {
            info!(user_id = %user_id, cleared, "Dropped incomplete verification sessions");
        }

        let verification_id = generate_verification_id(Utc::now());
        let existing_account = provider
            .find_existing_account(&verification_id, mobile_number)
            .await?;

        if let Some(account_id) = existing_account.as_deref() {
            if let Some(holder) = self.verifications.find_by_provider_account(account_id).await? {
                if holder.claimed_by_other(user_id) {
                    return Err(IdentityVerificationError::AccountAlreadyVerified);
                }
            }
        }

        let started = provider
            .start_session(StartSessionRequest {
                verification_id,
                user_id,
                email: user.email.clone(),
                mobile_number: mobile_number.map(str::to_string),
                existing_account_id: existing_account.clone(),
            })
            .await?;

        self.sessions
            .create(NewVerificationSession {
                verification_id: started.session_ref.clone(),
                user_id,
                method: provider.method(),
                mobile_number: mobile_number.map(str::to_string),
                flow_type: started.flow_type,
                consent_url: Some(started.redirect_url.clone()),
                provider_account_id: existing_account.clone(),
            })
            .await?;

        info!(
            user_id = %user_id,
            verification_id = %started.session_ref,
            method = %provider.method(),
            "Identity verification initiated"
        );

        Ok(VerificationInitiation {
            method: provider.method(),
            already_verified: false,
            verification_id: Some(started.session_ref),
            redirect_url: Some(started.redirect_url),
            client_secret: started.client_secret,
            flow_type: started.flow_type,
            account_exists: started.flow_type.map(|_| existing_account.is_some()),
            message: initiation_message(started.flow_type).to_string(),
        })
    }
}
