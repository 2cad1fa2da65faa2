pub mod billing_ledger_postgres;
pub mod cashfree;
pub mod payment_order_repository_postgres;
pub mod sea_orm_entity;
pub mod subscription_repository_postgres;

pub use billing_ledger_postgres::BillingLedgerPostgres;
pub use cashfree::{CashfreeConfig, CashfreeGateway};
pub use payment_order_repository_postgres::PaymentOrderRepositoryPostgres;
pub use subscription_repository_postgres::SubscriptionRepositoryPostgres;
