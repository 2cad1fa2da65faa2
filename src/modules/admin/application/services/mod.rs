mod admin_access_service;
mod dashboard_stats_service;
mod pending_users_service;
mod review_user_service;
mod user_details_service;

pub use admin_access_service::AdminAccessService;
pub use dashboard_stats_service::DashboardStatsService;
pub use pending_users_service::PendingUsersService;
pub use review_user_service::{ApproveUserService, RejectUserService};
pub use user_details_service::UserDetailsService;
