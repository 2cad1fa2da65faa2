pub mod billing_error;
pub mod cancel_subscription;
pub mod create_checkout;
pub mod current_subscription;
pub mod list_plans;
pub mod payment_history;
pub mod payment_status;
pub mod process_webhook;

pub use billing_error::BillingError;
pub use cancel_subscription::{CancelSubscriptionUseCase, CancellationReceipt};
pub use create_checkout::{
    CheckoutSession, CreateCheckoutCommand, CreateCheckoutCommandError, CreateCheckoutUseCase,
};
pub use current_subscription::CurrentSubscriptionUseCase;
pub use list_plans::ListPlansUseCase;
pub use payment_history::PaymentHistoryUseCase;
pub use payment_status::PaymentStatusUseCase;
pub use process_webhook::{ProcessWebhookUseCase, WebhookAck, WebhookDelivery};
