use async_trait::async_trait;

use super::AdminError;
use crate::modules::admin::application::domain::PendingUser;

#[async_trait]
pub trait ListPendingUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PendingUser>, AdminError>;
}
