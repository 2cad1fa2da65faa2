use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::BillingError;

#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    user_id: Uuid,
    plan_id: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCheckoutCommandError {
    #[error("Plan ID is required")]
    MissingPlan,
}

impl CreateCheckoutCommand {
    pub fn new(user_id: Uuid, plan_id: Option<String>) -> Result<Self, CreateCheckoutCommandError> {
        let plan_id = plan_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(CreateCheckoutCommandError::MissingPlan)?;

        Ok(Self { user_id, plan_id })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub order_id: String,
    pub payment_session_id: String,
    pub checkout_url: String,
}

#[async_trait]
pub trait CreateCheckoutUseCase: Send + Sync {
    async fn execute(&self, command: CreateCheckoutCommand)
        -> Result<CheckoutSession, BillingError>;
}
