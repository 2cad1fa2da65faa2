use async_trait::async_trait;

use crate::modules::admin::application::domain::PendingUser;
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, ListPendingUsersUseCase,
};
use crate::modules::admin::application::ports::outgoing::AdminQuery;

pub struct PendingUsersService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> PendingUsersService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPendingUsersUseCase for PendingUsersService<Q>
where
    Q: AdminQuery,
{
    async fn execute(&self) -> Result<Vec<PendingUser>, AdminError> {
        Ok(self.query.pending_users().await?)
    }
}
