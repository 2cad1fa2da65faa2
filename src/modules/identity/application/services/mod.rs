pub mod cleanup_sessions_service;
pub mod complete_verification_service;
pub mod identity_status_service;
pub mod initiate_verification_service;
pub mod provider_registry;
pub mod session_progress_service;

pub use cleanup_sessions_service::CleanupExpiredSessionsService;
pub use complete_verification_service::CompleteVerificationService;
pub use identity_status_service::IdentityStatusService;
pub use initiate_verification_service::InitiateVerificationService;
pub use provider_registry::IdentityProviderRegistry;
pub use session_progress_service::{AwaitAuthenticationService, SessionStatusService};
