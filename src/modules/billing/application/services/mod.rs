mod checkout_service;
mod list_plans_service;
mod payment_query_service;
mod subscription_service;
mod webhook_service;

pub use checkout_service::CheckoutService;
pub use list_plans_service::ListPlansService;
pub use payment_query_service::{PaymentHistoryService, PaymentStatusService};
pub use subscription_service::{CancelSubscriptionService, CurrentSubscriptionService};
pub use webhook_service::WebhookService;
