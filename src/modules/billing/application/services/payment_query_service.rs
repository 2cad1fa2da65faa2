use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::billing::application::domain::PaymentOrder;
use crate::modules::billing::application::ports::incoming::use_cases::{
    BillingError, PaymentHistoryUseCase, PaymentStatusUseCase,
};
use crate::modules::billing::application::ports::outgoing::{
    GatewayError, GatewayOrderStatus, PaymentGateway, PaymentOrderRepository,
};

pub struct PaymentStatusService<O>
where
    O: PaymentOrderRepository,
{
    orders: O,
    gateway: Option<Arc<dyn PaymentGateway>>,
}

impl<O> PaymentStatusService<O>
where
    O: PaymentOrderRepository,
{
    pub fn new(orders: O, gateway: Option<Arc<dyn PaymentGateway>>) -> Self {
        Self { orders, gateway }
    }
}

#[async_trait]
impl<O> PaymentStatusUseCase for PaymentStatusService<O>
where
    O: PaymentOrderRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        order_id: &str,
    ) -> Result<GatewayOrderStatus, BillingError> {
        // Another user's order is indistinguishable from a missing one.
        self.orders
            .find_by_order_id(order_id)
            .await?
            .filter(|order| order.user_id == user_id)
            .ok_or(BillingError::OrderNotFound)?;

        let gateway = self
            .gateway
            .as_ref()
            .ok_or(BillingError::Gateway(GatewayError::NotConfigured))?;

        Ok(gateway.order_status(order_id).await?)
    }
}

pub struct PaymentHistoryService<O>
where
    O: PaymentOrderRepository,
{
    orders: O,
}

impl<O> PaymentHistoryService<O>
where
    O: PaymentOrderRepository,
{
    pub fn new(orders: O) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<O> PaymentHistoryUseCase for PaymentHistoryService<O>
where
    O: PaymentOrderRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<PaymentOrder>, BillingError> {
        Ok(self.orders.list_for_user(user_id).await?)
    }
}
