pub mod payment_orders;
pub mod payment_records;
pub mod subscriptions;
