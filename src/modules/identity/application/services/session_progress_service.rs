use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use super::provider_registry::IdentityProviderRegistry;
use crate::modules::identity::application::domain::{SessionStatus, VerificationSession};
use crate::modules::identity::application::ports::incoming::use_cases::{
    AwaitAuthenticationUseCase, IdentityVerificationError, SessionProgress, SessionStatusUseCase,
};
use crate::modules::identity::application::ports::outgoing::{
    AuthenticationState, VerificationSessionRepository,
};

fn status_for(state: AuthenticationState) -> SessionStatus {
    match state {
        AuthenticationState::Authenticated => SessionStatus::Authenticated,
        AuthenticationState::Pending => SessionStatus::Pending,
    }
}

async fn owned_session<S: VerificationSessionRepository>(
    sessions: &S,
    user_id: Uuid,
    verification_id: &str,
) -> Result<Option<VerificationSession>, IdentityVerificationError> {
    Ok(sessions
        .find_by_verification_id(verification_id)
        .await?
        .filter(|s| s.belongs_to(user_id)))
}

/// Handles the return from the provider's consent page.
pub struct AwaitAuthenticationService<S>
where
    S: VerificationSessionRepository,
{
    sessions: S,
    registry: IdentityProviderRegistry,
}

impl<S> AwaitAuthenticationService<S>
where
    S: VerificationSessionRepository,
{
    pub fn new(sessions: S, registry: IdentityProviderRegistry) -> Self {
        Self { sessions, registry }
    }
}

#[async_trait]
impl<S> AwaitAuthenticationUseCase for AwaitAuthenticationService<S>
where
    S: VerificationSessionRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        verification_id: &str,
    ) -> Result<SessionProgress, IdentityVerificationError> {
        let session = owned_session(&self.sessions, user_id, verification_id)
            .await?
            .ok_or(IdentityVerificationError::InvalidSession)?;

        let provider = self.registry.for_method(session.method)?;
        let state = provider.poll_authentication(verification_id).await?;
        let status = status_for(state);

        self.sessions.update_status(verification_id, status).await?;

        Ok(SessionProgress::new(verification_id, status))
    }
}

pub struct SessionStatusService<S>
where
    S: VerificationSessionRepository,
{
    sessions: S,
    registry: IdentityProviderRegistry,
}

impl<S> SessionStatusService<S>
where
    S: VerificationSessionRepository,
{
    pub fn new(sessions: S, registry: IdentityProviderRegistry) -> Self {
        Self { sessions, registry }
    }
}

#[async_trait]
impl<S> SessionStatusUseCase for SessionStatusService<S>
where
    S: VerificationSessionRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        verification_id: &str,
    ) -> Result<SessionProgress, IdentityVerificationError> {
        let session = owned_session(&self.sessions, user_id, verification_id)
            .await?
            .ok_or(IdentityVerificationError::SessionNotFound)?;

        if !session.status.is_awaiting_provider() {
            return Ok(SessionProgress::new(verification_id, session.status));
        }

        let polled = match self.registry.for_method(session.method) {
            Ok(provider) => provider.poll_authentication(verification_id).await,
            Err(e) => Err(e),
        };

        match polled {
            Ok(state) => {
                let status = status_for(state);
                if status != session.status {
                    self.sessions.update_status(verification_id, status).await?;
                }
                Ok(SessionProgress::new(verification_id, status))
            }
            Err(e) => {
                warn!(
                    verification_id = %verification_id,
                    error = %e,
                    "Provider status check failed, returning stored status"
                );
                Ok(SessionProgress::new(verification_id, session.status))
            }
        }
    }
}
