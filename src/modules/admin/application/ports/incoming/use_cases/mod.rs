pub mod admin_error;
pub mod dashboard_stats;
pub mod list_pending_users;
pub mod review_user;
pub mod user_details;

pub use admin_error::AdminError;
pub use dashboard_stats::DashboardStatsUseCase;
pub use list_pending_users::ListPendingUsersUseCase;
pub use review_user::{
    ApproveUserUseCase, RejectUserCommand, RejectUserCommandError, RejectUserUseCase,
};
pub use user_details::UserDetailsUseCase;
