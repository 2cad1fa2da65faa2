use async_trait::async_trait;

use super::AdminError;
use crate::modules::admin::application::domain::DashboardStats;

#[async_trait]
pub trait DashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, AdminError>;
}
