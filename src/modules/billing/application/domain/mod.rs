mod order;
mod plan;
mod signature;
mod subscription;
mod webhook;

pub use order::{NewPaymentOrder, PaymentOrder, PaymentOrderStatus, PaymentReceipt};
pub use plan::{BillingCycle, Plan, PlanCatalog, PlanListing, PlanType};
pub use signature::verify_webhook_signature;
pub use subscription::{Subscription, SubscriptionStatus};
pub use webhook::{PaymentOutcome, WebhookEvent, WebhookParseError};
