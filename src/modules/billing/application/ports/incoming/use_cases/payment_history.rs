use async_trait::async_trait;
use uuid::Uuid;

use super::BillingError;
use crate::modules::billing::application::domain::PaymentOrder;

#[async_trait]
pub trait PaymentHistoryUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<PaymentOrder>, BillingError>;
}
