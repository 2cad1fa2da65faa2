pub mod admin_access_guard;
pub mod admin_query;

pub use admin_access_guard::{AdminAccessError, AdminAccessGuard};
pub use admin_query::{AdminQuery, AdminQueryError};
