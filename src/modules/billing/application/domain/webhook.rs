use serde::Deserialize;

/// What the gateway says happened to a payment attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Success,
    Failed,
    Other(String),
}

impl PaymentOutcome {
    fn from_gateway(status: &str) -> Self {
        match status {
            "SUCCESS" => PaymentOutcome::Success,
            "FAILED" | "USER_DROPPED" | "CANCELLED" => PaymentOutcome::Failed,
            other => PaymentOutcome::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WebhookParseError {
    #[error("Malformed webhook payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    pub event_type: String,
    pub order_id: String,
    pub order_amount: Option<f64>,
    pub order_currency: Option<String>,
    pub payment_id: Option<String>,
    pub payment_amount: Option<f64>,
    pub payment_method: Option<String>,
    pub outcome: PaymentOutcome,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type", default)]
    event_type: String,
    data: RawData,
}

#[derive(Deserialize)]
struct RawData {
    order: RawOrder,
    #[serde(default)]
    payment: Option<RawPayment>,
}

#[derive(Deserialize)]
struct RawOrder {
    order_id: String,
    #[serde(default)]
    order_amount: Option<f64>,
    #[serde(default)]
    order_currency: Option<String>,
}

#[derive(Deserialize)]
struct RawPayment {
    #[serde(default)]
    cf_payment_id: Option<serde_json::Value>,
    #[serde(default)]
    payment_status: Option<String>,
    #[serde(default)]
    payment_amount: Option<f64>,
    #[serde(default)]
    payment_group: Option<String>,
    #[serde(default)]
    payment_method: Option<serde_json::Value>,
}

/// Gateway ids arrive as numbers or strings depending on API version.
fn id_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl WebhookEvent {
    pub fn parse(body: &[u8]) -> Result<Self, WebhookParseError> {
        let raw: RawEvent = serde_json::from_slice(body)
            .map_err(|e| WebhookParseError::Malformed(e.to_string()))?;

        let payment = raw.data.payment;
        let status = payment
            .as_ref()
            .and_then(|p| p.payment_status.clone())
            .unwrap_or_default();

        let (payment_id, payment_amount, payment_method) = match payment {
            Some(p) => {
                // Method is either a plain string or an object keyed by the instrument.
                let method = match p.payment_method {
                    Some(serde_json::Value::String(s)) => Some(s),
                    Some(serde_json::Value::Object(map)) => map.keys().next().cloned(),
                    _ => None,
                }
                .or(p.payment_group);
                (
                    p.cf_payment_id.and_then(id_to_string),
                    p.payment_amount,
                    method,
                )
            }
            None => (None, None, None),
        };

        Ok(Self {
            event_type: raw.event_type,
            order_id: raw.data.order.order_id,
            order_amount: raw.data.order.order_amount,
            order_currency: raw.data.order.order_currency,
            payment_id,
            payment_amount,
            payment_method,
            outcome: PaymentOutcome::from_gateway(&status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_success_event() {
        let body = json!({
            "type": "PAYMENT_SUCCESS_WEBHOOK",
            "data": {
                "order": { "order_id": "order_1", "order_amount": 9.99, "order_currency": "USD" },
                "payment": {
                    "cf_payment_id": 5114910,
                    "payment_status": "SUCCESS",
                    "payment_amount": 9.99,
                    "payment_method": { "upi": { "upi_id": "x@y" } }
                }
            }
        })
        .to_string();

        let event = WebhookEvent::parse(body.as_bytes()).unwrap();
        assert_eq!(event.order_id, "order_1");
        assert_eq!(event.outcome, PaymentOutcome::Success);
        assert_eq!(event.payment_id.as_deref(), Some("5114910"));
        assert_eq!(event.payment_method.as_deref(), Some("upi"));
    }

    #[test]
    fn dropped_and_cancelled_payments_count_as_failed() {
        for status in ["FAILED", "USER_DROPPED", "CANCELLED"] {
            let body = json!({
                "type": "PAYMENT_FAILED_WEBHOOK",
                "data": { "order": { "order_id": "o" }, "payment": { "payment_status": status } }
            })
            .to_string();
            assert_eq!(
                WebhookEvent::parse(body.as_bytes()).unwrap().outcome,
                PaymentOutcome::Failed
            );
        }
    }

    #[test]
    fn missing_payment_block_is_other() {
        let body = json!({ "type": "X", "data": { "order": { "order_id": "o" } } }).to_string();
        assert_eq!(
            WebhookEvent::parse(body.as_bytes()).unwrap().outcome,
            PaymentOutcome::Other(String::new())
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(WebhookEvent::parse(b"not json").is_err());
        assert!(WebhookEvent::parse(br#"{"data":{}}"#).is_err());
    }
}
