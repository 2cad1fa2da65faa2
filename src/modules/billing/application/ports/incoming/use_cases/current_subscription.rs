use async_trait::async_trait;
use uuid::Uuid;

use super::BillingError;
use crate::modules::billing::application::domain::Subscription;

#[async_trait]
pub trait CurrentSubscriptionUseCase: Send + Sync {
    /// The caller's subscription while it is ACTIVE.
    async fn execute(&self, user_id: Uuid) -> Result<Option<Subscription>, BillingError>;
}
