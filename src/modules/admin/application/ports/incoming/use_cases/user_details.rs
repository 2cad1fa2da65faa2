use async_trait::async_trait;
use uuid::Uuid;

use super::AdminError;
use crate::modules::admin::application::domain::UserDetails;

#[async_trait]
pub trait UserDetailsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserDetails, AdminError>;
}
