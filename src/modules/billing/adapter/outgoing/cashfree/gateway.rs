use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::config::{CashfreeConfig, API_VERSION};
use crate::modules::billing::application::ports::outgoing::{
    CreateOrderRequest, GatewayError, GatewayOrder, GatewayOrderStatus, PaymentGateway,
};

#[derive(Debug, Deserialize)]
struct CreatedOrder {
    order_id: String,
    payment_session_id: String,
}

#[derive(Debug, Deserialize)]
struct OrderSnapshot {
    order_id: String,
    order_status: String,
    #[serde(default)]
    order_amount: Option<f64>,
    #[serde(default)]
    order_currency: Option<String>,
}

/// Cashfree Payment Gateway orders API.
pub struct CashfreeGateway {
    config: CashfreeConfig,
    http_client: reqwest::Client,
}

impl CashfreeGateway {
    pub fn new(config: CashfreeConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();
        Self {
            config,
            http_client,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("x-client-id", &self.config.client_id)
            .header("x-client-secret", &self.config.client_secret)
            .header("x-api-version", API_VERSION)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP status {}: {}",
                status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() || e.is_connect() {
        GatewayError::Unreachable(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl PaymentGateway for CashfreeGateway {
    async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<GatewayOrder, GatewayError> {
        let body = json!({
            "order_id": request.order_id,
            "order_amount": request.amount,
            "order_currency": request.currency,
            "customer_details": {
                "customer_id": request.customer.customer_id,
                "customer_email": request.customer.email,
                "customer_name": request.customer.name,
                "customer_phone": request.customer.phone,
            },
            "order_meta": {
                "return_url": self.config.return_url(&request.order_id),
                "notify_url": self.config.notify_url(),
            },
            "order_note": request.note,
        });

        let created: CreatedOrder = self
            .send(
                self.http_client
                    .post(format!("{}/orders", self.config.base_url))
                    .json(&body),
            )
            .await?;
        debug!(order_id = %created.order_id, "Gateway order created");

        Ok(GatewayOrder {
            checkout_url: self.config.checkout_url(&created.payment_session_id),
            order_id: created.order_id,
            payment_session_id: created.payment_session_id,
        })
    }

    async fn order_status(&self, order_id: &str) -> Result<GatewayOrderStatus, GatewayError> {
        let snapshot: OrderSnapshot = self
            .send(
                self.http_client
                    .get(format!("{}/orders/{}", self.config.base_url, order_id)),
            )
            .await?;

        Ok(GatewayOrderStatus {
            order_id: snapshot.order_id,
            status: snapshot.order_status,
            amount: snapshot.order_amount,
            currency: snapshot.order_currency,
        })
    }
}
