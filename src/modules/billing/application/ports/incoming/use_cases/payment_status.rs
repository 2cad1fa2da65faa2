use async_trait::async_trait;
use uuid::Uuid;

use super::BillingError;
use crate::modules::billing::application::ports::outgoing::GatewayOrderStatus;

#[async_trait]
pub trait PaymentStatusUseCase: Send + Sync {
    /// Live gateway status of one of the caller's own orders.
    async fn execute(&self, user_id: Uuid, order_id: &str)
        -> Result<GatewayOrderStatus, BillingError>;
}
