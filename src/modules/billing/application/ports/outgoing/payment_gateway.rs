use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub customer_id: String,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    pub order_id: String,
    pub amount: f64,
    pub currency: String,
    pub customer: CustomerDetails,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayOrder {
    pub order_id: String,
    pub payment_session_id: String,
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayOrderStatus {
    pub order_id: String,
    pub status: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Payment gateway is not configured")]
    NotConfigured,

    #[error("Payment gateway unreachable: {0}")]
    Unreachable(String),

    #[error("Payment gateway request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected payment gateway response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(&self, request: CreateOrderRequest)
        -> Result<GatewayOrder, GatewayError>;

    async fn order_status(&self, order_id: &str) -> Result<GatewayOrderStatus, GatewayError>;
}
