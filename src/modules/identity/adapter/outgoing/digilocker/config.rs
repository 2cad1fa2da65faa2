use crate::shared::config::optional;

#[derive(Debug, Clone)]
pub struct DigilockerConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    /// Pre-computed `x-cf-signature` value, when the account requires one.
    pub api_signature: Option<String>,
    pub redirect_uri: String,
}

impl DigilockerConfig {
    /// `None` when credentials are absent; the provider is then left unregistered.
    pub fn from_env(frontend_url: &str) -> Option<Self> {
        let client_id = non_empty(optional("CASHFREE_CLIENT_ID", ""))?;
        let client_secret = non_empty(optional("CASHFREE_CLIENT_SECRET", ""))?;

        Some(Self {
            client_id,
            client_secret,
            base_url: optional(
                "CASHFREE_VERIFICATION_BASE_URL",
                "https://sandbox.cashfree.com",
            )
            .trim_end_matches('/')
            .to_string(),
            api_signature: non_empty(optional("CASHFREE_API_SIGNATURE", "")),
            redirect_uri: format!("{}/digilocker/callback", frontend_url.trim_end_matches('/')),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
