mod dashboard;
mod review;

pub use dashboard::{conversion_rate, ConversionRates, DashboardStats, StatusCounts};
pub use review::{PendingUser, ReviewDecision, UserDetails};
