use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::config::DigilockerConfig;
use crate::modules::identity::adapter::outgoing::http::{build_client, send_json};
use crate::modules::identity::application::domain::FlowType;
use crate::modules::identity::application::ports::outgoing::{
    AuthenticationState, IdentityProvider, ProviderError, ProviderOutcome, ProviderSession,
    StartSessionRequest, VerifiedIdentity,
};
use crate::modules::onboarding::application::domain::VerificationMethod;
use crate::modules::reconciliation::application::domain::IdentityFields;

const DOCUMENT: &str = "AADHAAR";

#[derive(Debug, Deserialize)]
struct AccountLookup {
    #[serde(default)]
    digilocker_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConsentLink {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ConsentStatus {
    status: String,
}

#[derive(Debug, Default, Deserialize)]
struct SplitAddress {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    pincode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AadhaarDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dob: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    split_address: Option<SplitAddress>,
}

/// Cashfree-brokered DigiLocker consent flow over the AADHAAR document.
pub struct DigilockerProvider {
    config: DigilockerConfig,
    http_client: reqwest::Client,
}

impl DigilockerProvider {
    pub fn new(config: DigilockerConfig) -> Self {
        Self {
            config,
            http_client: build_client(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("x-client-id", &self.config.client_id)
            .header("x-client-secret", &self.config.client_secret);
        match &self.config.api_signature {
            Some(signature) => request.header("x-cf-signature", signature),
            None => request,
        }
    }

    fn get(&self, path: &str, verification_id: &str) -> reqwest::RequestBuilder {
        self.authorize(
            self.http_client
                .get(self.url(path))
                .query(&[("verification_id", verification_id)]),
        )
    }
}

fn document_to_identity(raw: Value) -> Result<VerifiedIdentity, ProviderError> {
    let document: AadhaarDocument = serde_json::from_value(raw.clone())
        .map_err(|e| ProviderError::InvalidResponse(format!("unreadable document: {e}")))?;
    let address = document.split_address.unwrap_or_default();

    Ok(VerifiedIdentity {
        provider_account_id: document.uid,
        fields: IdentityFields {
            name: document.name.unwrap_or_default(),
            dob: document.dob.unwrap_or_default(),
            gender: document.gender.unwrap_or_default(),
            state: address.state.unwrap_or_default(),
            pincode: address.pincode.unwrap_or_default(),
        },
        raw,
    })
}

#[async_trait]
impl IdentityProvider for DigilockerProvider {
    fn method(&self) -> VerificationMethod {
        VerificationMethod::Digilocker
    }

    fn requires_mobile_number(&self) -> bool {
        true
    }

    fn requires_declared_data(&self) -> bool {
        true
    }

    async fn find_existing_account(
        &self,
        verification_id: &str,
        mobile_number: Option<&str>,
    ) -> Result<Option<String>, ProviderError> {
        let Some(mobile_number) = mobile_number else {
            return Ok(None);
        };

        let lookup: AccountLookup = send_json(self.authorize(
            self.http_client
                .post(self.url("/verification/digilocker/verify-account"))
                .json(&json!({
                    "verification_id": verification_id,
                    "mobile_number": mobile_number,
                })),
        ))
        .await?;

        Ok(lookup.digilocker_id.filter(|id| !id.is_empty()))
    }

    async fn start_session(
        &self,
        request: StartSessionRequest,
    ) -> Result<ProviderSession, ProviderError> {
        let flow_type = if request.existing_account_id.is_some() {
            FlowType::Signin
        } else {
            FlowType::Signup
        };

        let consent: ConsentLink = send_json(self.authorize(
            self.http_client
                .post(self.url("/verification/digilocker"))
                .json(&json!({
                    "verification_id": request.verification_id,
                    "document_requested": [DOCUMENT],
                    "user_flow": flow_type.as_str(),
                    "redirect_uri": self.config.redirect_uri,
                })),
        ))
        .await?;

        debug!(
            verification_id = %request.verification_id,
            flow = flow_type.as_str(),
            "DigiLocker consent link created"
        );

        Ok(ProviderSession {
            session_ref: request.verification_id,
            redirect_url: consent.url,
            client_secret: None,
            flow_type: Some(flow_type),
        })
    }

    async fn poll_authentication(
        &self,
        session_ref: &str,
    ) -> Result<AuthenticationState, ProviderError> {
        let status: ConsentStatus =
            send_json(self.get("/verification/digilocker", session_ref)).await?;

        Ok(if status.status == "AUTHENTICATED" {
            AuthenticationState::Authenticated
        } else {
            AuthenticationState::Pending
        })
    }

    async fn fetch_verified_data(
        &self,
        session_ref: &str,
    ) -> Result<ProviderOutcome, ProviderError> {
        let raw: Value = send_json(self.get(
            &format!("/verification/digilocker/document/{}", DOCUMENT),
            session_ref,
        ))
        .await?;

        document_to_identity(raw).map(ProviderOutcome::Verified)
    }
}
