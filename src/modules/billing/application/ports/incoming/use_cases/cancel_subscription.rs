use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::BillingError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancellationReceipt {
    pub message: String,
}

#[async_trait]
pub trait CancelSubscriptionUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CancellationReceipt, BillingError>;
}
