use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::modules::billing::application::ports::incoming::use_cases::WebhookDelivery;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn header(req: &HttpRequest, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        req.headers()
            .get(*name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    })
}

/// Gateway callback. Answers 200 unless storage failed, so the gateway only retries
/// what can still succeed.
#[post("/api/payment/webhook")]
pub async fn payment_webhook_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let delivery = WebhookDelivery {
        signature: header(&req, &["x-webhook-signature", "x-cf-webhook-signature"]),
        timestamp: header(&req, &["x-webhook-timestamp", "x-cf-webhook-timestamp"]),
        body: body.to_vec(),
    };

    match data.billing.webhook.execute(delivery).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            tracing::error!("Webhook processing failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
