use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::billing::application::domain::Subscription;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubscriptionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, SubscriptionRepositoryError>;
}
