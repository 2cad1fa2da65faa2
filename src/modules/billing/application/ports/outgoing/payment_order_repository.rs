use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::billing::application::domain::{NewPaymentOrder, PaymentOrder};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentOrderRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PaymentOrderRepository: Send + Sync {
    async fn create(&self, order: NewPaymentOrder)
        -> Result<PaymentOrder, PaymentOrderRepositoryError>;

    async fn find_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<PaymentOrder>, PaymentOrderRepositoryError>;

    /// Newest first.
    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PaymentOrder>, PaymentOrderRepositoryError>;
}
