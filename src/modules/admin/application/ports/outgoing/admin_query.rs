use async_trait::async_trait;

use crate::modules::admin::application::domain::{PendingUser, StatusCounts};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only views over users, verifications and subscriptions for back-office screens.
#[async_trait]
pub trait AdminQuery: Send + Sync {
    /// VIDEO_VERIFIED users, least recently updated first.
    async fn pending_users(&self) -> Result<Vec<PendingUser>, AdminQueryError>;

    async fn status_counts(&self) -> Result<StatusCounts, AdminQueryError>;

    async fn rejected_verification_count(&self) -> Result<u64, AdminQueryError>;

    /// Plan name of every ACTIVE subscription, one entry per subscription.
    async fn active_subscription_plans(&self) -> Result<Vec<String>, AdminQueryError>;
}
