use crate::shared::config::optional;

#[derive(Debug, Clone)]
pub struct StripeIdentityConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl StripeIdentityConfig {
    /// `None` without `STRIPE_SECRET_KEY`.
    pub fn from_env() -> Option<Self> {
        let secret_key = optional("STRIPE_SECRET_KEY", "").trim().to_string();
        if secret_key.is_empty() {
            return None;
        }

        Some(Self {
            secret_key,
            api_base: optional("STRIPE_API_BASE", "https://api.stripe.com")
                .trim_end_matches('/')
                .to_string(),
        })
    }
}
