use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::application::domain::FlowType;
use crate::modules::onboarding::application::domain::VerificationMethod;
use crate::modules::reconciliation::application::domain::IdentityFields;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Identity provider not configured: {0}")]
    NotConfigured(String),

    #[error("Identity provider unreachable: {0}")]
    Unreachable(String),

    #[error("Identity provider request failed: {0}")]
    RequestFailed(String),

    #[error("Identity provider returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone)]
pub struct StartSessionRequest {
    /// Locally generated id; hosted providers replace it with their own.
    pub verification_id: String,
    pub user_id: Uuid,
    pub email: String,
    pub mobile_number: Option<String>,
    /// Locker account found for the mobile number, if any.
    pub existing_account_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSession {
    /// Key the local session is stored under and later polled with.
    pub session_ref: String,
    pub redirect_url: String,
    pub client_secret: Option<String>,
    pub flow_type: Option<FlowType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationState {
    Authenticated,
    Pending,
}

/// Provider identity normalized into the reconciliation field set.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub provider_account_id: Option<String>,
    pub fields: IdentityFields,
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Verified(VerifiedIdentity),
    /// Still processing or waiting on the user.
    Pending,
    /// Provider-reported terminal status, e.g. `canceled`.
    Rejected(String),
}

/// One identity-proofing backend. Selected per user through the country table.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn method(&self) -> VerificationMethod;

    /// Locker-style providers need a phone number to look up the account.
    fn requires_mobile_number(&self) -> bool {
        false
    }

    /// When true the provider payload is reconciled against what the user
    /// declared, and the session must be authenticated before fetching.
    fn requires_declared_data(&self) -> bool {
        false
    }

    /// Looks up an already existing provider account for the applicant.
    async fn find_existing_account(
        &self,
        _verification_id: &str,
        _mobile_number: Option<&str>,
    ) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    async fn start_session(
        &self,
        request: StartSessionRequest,
    ) -> Result<ProviderSession, ProviderError>;

    async fn poll_authentication(
        &self,
        session_ref: &str,
    ) -> Result<AuthenticationState, ProviderError>;

    async fn fetch_verified_data(&self, session_ref: &str)
        -> Result<ProviderOutcome, ProviderError>;
}
