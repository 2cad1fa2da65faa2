use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOrderStatus {
    Pending,
    Success,
    Failed,
}

impl PaymentOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOrderStatus::Pending => "PENDING",
            PaymentOrderStatus::Success => "SUCCESS",
            PaymentOrderStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for PaymentOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PaymentOrderStatus::Pending),
            "SUCCESS" => Ok(PaymentOrderStatus::Success),
            "FAILED" => Ok(PaymentOrderStatus::Failed),
            other => Err(format!("Unknown payment order status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    #[serde(skip)]
    pub user_id: Uuid,
    pub plan_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentOrderStatus,
    pub is_subscription: bool,
    #[serde(skip)]
    pub payment_session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentOrder {
    pub order_id: String,
    pub user_id: Uuid,
    pub plan_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub is_subscription: bool,
    pub payment_session_id: Option<String>,
}

/// Confirmed capture reported by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub order_id: String,
    pub gateway_payment_id: String,
    pub amount: f64,
    pub currency: String,
    pub method: Option<String>,
}
