use crate::shared::config::optional;

pub const API_VERSION: &str = "2022-09-01";

#[derive(Debug, Clone)]
pub struct CashfreeConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    pub production: bool,
    pub frontend_url: String,
    pub api_url: String,
}

impl CashfreeConfig {
    /// `None` without client credentials; checkout then answers 503.
    pub fn from_env(frontend_url: &str) -> Option<Self> {
        let client_id = optional("CASHFREE_CLIENT_ID", "").trim().to_string();
        let client_secret = optional("CASHFREE_CLIENT_SECRET", "").trim().to_string();
        if client_id.is_empty() || client_secret.is_empty() {
            return None;
        }

        Some(Self {
            client_id,
            client_secret,
            base_url: optional("CASHFREE_PG_BASE_URL", "https://sandbox.cashfree.com/pg")
                .trim_end_matches('/')
                .to_string(),
            production: optional("CASHFREE_ENV", "sandbox") == "production",
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
            api_url: optional("API_URL", "http://localhost:8080")
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn checkout_url(&self, payment_session_id: &str) -> String {
        let host = if self.production {
            "payments.cashfree.com"
        } else {
            "payments-test.cashfree.com"
        };
        format!("https://{}/order/#{}", host, payment_session_id)
    }

    pub fn return_url(&self, order_id: &str) -> String {
        format!("{}/payment/success?order_id={}", self.frontend_url, order_id)
    }

    pub fn notify_url(&self) -> String {
        format!("{}/api/payment/webhook", self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(production: bool) -> CashfreeConfig {
        CashfreeConfig {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            base_url: "https://sandbox.cashfree.com/pg".to_string(),
            production,
            frontend_url: "https://app.example.com".to_string(),
            api_url: "https://api.example.com".to_string(),
        }
    }

    #[test]
    fn checkout_host_follows_environment() {
        assert_eq!(
            config(true).checkout_url("sess_1"),
            "https://payments.cashfree.com/order/#sess_1"
        );
        assert_eq!(
            config(false).checkout_url("sess_1"),
            "https://payments-test.cashfree.com/order/#sess_1"
        );
    }

    #[test]
    fn callback_urls() {
        let config = config(false);
        assert_eq!(
            config.return_url("order_1"),
            "https://app.example.com/payment/success?order_id=order_1"
        );
        assert_eq!(config.notify_url(), "https://api.example.com/api/payment/webhook");
    }
}
