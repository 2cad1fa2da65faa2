pub mod billing_ledger;
pub mod payment_gateway;
pub mod payment_order_repository;
pub mod subscription_repository;

pub use billing_ledger::{
    BillingLedger, BillingLedgerError, CancellationOutcome, FailureSettlement, SuccessSettlement,
};
pub use payment_gateway::{
    CreateOrderRequest, CustomerDetails, GatewayError, GatewayOrder, GatewayOrderStatus,
    PaymentGateway,
};
pub use payment_order_repository::{PaymentOrderRepository, PaymentOrderRepositoryError};
pub use subscription_repository::{SubscriptionRepository, SubscriptionRepositoryError};
