use async_trait::async_trait;
use serde::Serialize;

use super::BillingError;

/// One inbound gateway notification, body untouched.
#[derive(Debug, Clone, Default)]
pub struct WebhookDelivery {
    pub signature: Option<String>,
    pub timestamp: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookAck {
    pub received: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl WebhookAck {
    pub fn rejected(reason: &str) -> Self {
        Self {
            received: false,
            processed: None,
            reason: Some(reason.to_string()),
        }
    }

    pub fn processed() -> Self {
        Self {
            received: true,
            processed: Some(true),
            reason: None,
        }
    }

    pub fn skipped(reason: &str) -> Self {
        Self {
            received: true,
            processed: Some(false),
            reason: Some(reason.to_string()),
        }
    }
}

#[async_trait]
pub trait ProcessWebhookUseCase: Send + Sync {
    /// Errors only for storage failures; everything else is acknowledged.
    async fn execute(&self, delivery: WebhookDelivery) -> Result<WebhookAck, BillingError>;
}
