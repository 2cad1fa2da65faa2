use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::config::StripeIdentityConfig;
use crate::modules::identity::adapter::outgoing::http::{build_client, send_json};
use crate::modules::identity::application::ports::outgoing::{
    AuthenticationState, IdentityProvider, ProviderError, ProviderOutcome, ProviderSession,
    StartSessionRequest, VerifiedIdentity,
};
use crate::modules::onboarding::application::domain::VerificationMethod;
use crate::modules::reconciliation::application::domain::IdentityFields;

#[derive(Debug, Deserialize)]
struct CreatedSession {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DateOfBirth {
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    line1: Option<String>,
    line2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VerifiedOutputs {
    first_name: Option<String>,
    last_name: Option<String>,
    dob: Option<DateOfBirth>,
    id_number: Option<String>,
    sex: Option<String>,
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct SessionSnapshot {
    id: String,
    status: String,
    #[serde(default)]
    verified_outputs: Option<VerifiedOutputs>,
}

/// Stripe Identity hosted document verification.
pub struct StripeIdentityProvider {
    config: StripeIdentityConfig,
    http_client: reqwest::Client,
}

impl StripeIdentityProvider {
    pub fn new(config: StripeIdentityConfig) -> Self {
        Self {
            config,
            http_client: build_client(),
        }
    }

    fn sessions_url(&self) -> String {
        format!("{}/v1/identity/verification_sessions", self.config.api_base)
    }

    async fn retrieve(&self, session_ref: &str) -> Result<SessionSnapshot, ProviderError> {
        send_json(
            self.http_client
                .get(format!("{}/{}", self.sessions_url(), session_ref))
                .bearer_auth(&self.config.secret_key)
                .query(&[("expand[]", "verified_outputs")]),
        )
        .await
    }
}

fn iso_date(dob: &DateOfBirth) -> Option<String> {
    match (dob.year, dob.month, dob.day) {
        (Some(y), Some(m), Some(d)) => Some(format!("{:04}-{:02}-{:02}", y, m, d)),
        _ => None,
    }
}

fn snapshot_to_identity(snapshot: SessionSnapshot) -> VerifiedIdentity {
    let outputs = snapshot.verified_outputs.unwrap_or_default();
    let address = outputs.address.unwrap_or_default();
    let name = format!(
        "{} {}",
        outputs.first_name.unwrap_or_default(),
        outputs.last_name.unwrap_or_default()
    )
    .trim()
    .to_string();
    let dob = outputs.dob.as_ref().and_then(iso_date);
    let provider_account_id = outputs
        .id_number
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| snapshot.id.clone());

    let raw = json!({
        "sessionId": snapshot.id,
        "name": name,
        "dateOfBirth": dob,
        "documentNumber": outputs.id_number,
        "gender": outputs.sex,
        "state": address.state,
        "pincode": address.postal_code,
        "addressLine1": address.line1,
        "addressLine2": address.line2,
        "city": address.city,
        "country": address.country,
    });

    VerifiedIdentity {
        provider_account_id: Some(provider_account_id),
        fields: IdentityFields {
            name,
            dob: dob.unwrap_or_default(),
            gender: outputs.sex.unwrap_or_default(),
            state: address.state.unwrap_or_default(),
            pincode: address.postal_code.unwrap_or_default(),
        },
        raw,
    }
}

fn outcome_for(snapshot: SessionSnapshot) -> ProviderOutcome {
    match snapshot.status.as_str() {
        "verified" => ProviderOutcome::Verified(snapshot_to_identity(snapshot)),
        "processing" | "requires_input" => ProviderOutcome::Pending,
        other => ProviderOutcome::Rejected(other.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for StripeIdentityProvider {
    fn method(&self) -> VerificationMethod {
        VerificationMethod::StripeIdentity
    }

    async fn start_session(
        &self,
        request: StartSessionRequest,
    ) -> Result<ProviderSession, ProviderError> {
        let user_id = request.user_id.to_string();
        let created: CreatedSession = send_json(
            self.http_client
                .post(self.sessions_url())
                .bearer_auth(&self.config.secret_key)
                .form(&[
                    ("type", "document"),
                    ("metadata[userId]", user_id.as_str()),
                    ("metadata[email]", request.email.as_str()),
                ]),
        )
        .await?;

        Ok(ProviderSession {
            redirect_url: created.url.unwrap_or_default(),
            session_ref: created.id,
            client_secret: created.client_secret,
            flow_type: None,
        })
    }

    async fn poll_authentication(
        &self,
        session_ref: &str,
    ) -> Result<AuthenticationState, ProviderError> {
        let snapshot = self.retrieve(session_ref).await?;
        Ok(if snapshot.status == "verified" {
            AuthenticationState::Authenticated
        } else {
            AuthenticationState::Pending
        })
    }

    async fn fetch_verified_data(
        &self,
        session_ref: &str,
    ) -> Result<ProviderOutcome, ProviderError> {
        Ok(outcome_for(self.retrieve(session_ref).await?))
    }
}
