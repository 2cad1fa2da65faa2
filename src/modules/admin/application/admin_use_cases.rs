use std::sync::Arc;

use super::ports::incoming::use_cases::{
    ApproveUserUseCase, DashboardStatsUseCase, ListPendingUsersUseCase, RejectUserUseCase,
    UserDetailsUseCase,
};
use super::ports::outgoing::AdminAccessGuard;

#[derive(Clone)]
pub struct AdminUseCases {
    pub access_guard: Arc<dyn AdminAccessGuard>,
    pub pending_users: Arc<dyn ListPendingUsersUseCase>,
    pub user_details: Arc<dyn UserDetailsUseCase>,
    pub approve: Arc<dyn ApproveUserUseCase>,
    pub reject: Arc<dyn RejectUserUseCase>,
    pub dashboard: Arc<dyn DashboardStatsUseCase>,
}
