use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminAccessError {
    #[error("You do not have admin access")]
    NotAdmin,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AdminAccessGuard: Send + Sync {
    async fn require_admin(&self, user_id: Uuid) -> Result<(), AdminAccessError>;
}
