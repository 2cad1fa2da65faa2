mod cleanup_sessions;
mod complete;
mod error_response;
mod identity_status;
mod initiate;
mod session_progress;

pub use cleanup_sessions::cleanup_expired_sessions_handler;
pub use complete::complete_verification_handler;
pub use identity_status::identity_status_handler;
pub use initiate::initiate_verification_handler;
pub use session_progress::{session_status_handler, verification_callback_handler};
