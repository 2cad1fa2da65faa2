mod checkout;
mod payments;
mod plans;
mod subscription;
mod webhook;

pub use checkout::checkout_handler;
pub use payments::{payment_history_handler, payment_status_handler};
pub use plans::list_plans_handler;
pub use subscription::{cancel_subscription_handler, current_subscription_handler};
pub use webhook::payment_webhook_handler;

use actix_web::HttpResponse;

use crate::modules::billing::application::ports::incoming::use_cases::BillingError;
use crate::modules::billing::application::ports::outgoing::GatewayError;
use crate::shared::api::ApiResponse;

fn billing_error_response(e: BillingError) -> HttpResponse {
    let message = e.to_string();
    match e {
        BillingError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", &message),
        BillingError::InvalidStatus(_) => ApiResponse::bad_request("INVALID_STATUS", &message),
        BillingError::UnknownPlan => ApiResponse::bad_request("INVALID_PLAN", &message),
        BillingError::OrderNotFound => ApiResponse::not_found("ORDER_NOT_FOUND", &message),
        BillingError::NoActiveSubscription => {
            ApiResponse::bad_request("NO_ACTIVE_SUBSCRIPTION", &message)
        }
        BillingError::Gateway(GatewayError::NotConfigured | GatewayError::Unreachable(_)) => {
            tracing::error!("Payment gateway unavailable: {}", message);
            ApiResponse::service_unavailable(
                "GATEWAY_UNAVAILABLE",
                "Payment gateway is unavailable",
            )
        }
        BillingError::Gateway(_) => {
            tracing::error!("Payment gateway call failed: {}", message);
            ApiResponse::bad_gateway("GATEWAY_ERROR", "Payment gateway request failed")
        }
        BillingError::RepositoryError(msg) => {
            tracing::error!("Billing storage failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
