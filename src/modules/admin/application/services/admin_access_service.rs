use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::{AdminAccessError, AdminAccessGuard};
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

/// Reads the caller's stored role on every check; token claims are never trusted for it.
pub struct AdminAccessService {
    users: Arc<dyn UserRepository>,
}

impl AdminAccessService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AdminAccessGuard for AdminAccessService {
    async fn require_admin(&self, user_id: Uuid) -> Result<(), AdminAccessError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| AdminAccessError::RepositoryError(e.to_string()))?
            .ok_or(AdminAccessError::UserNotFound)?;

        if !user.is_admin() {
            tracing::warn!(user_id = %user_id, "Admin route refused for non-admin user");
            return Err(AdminAccessError::NotAdmin);
        }

        Ok(())
    }
}
