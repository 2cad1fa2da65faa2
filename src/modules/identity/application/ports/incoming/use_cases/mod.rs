pub mod cleanup_sessions;
pub mod complete_verification;
pub mod identity_error;
pub mod identity_status;
pub mod initiate_verification;
pub mod session_progress;

pub use cleanup_sessions::{CleanupExpiredSessionsUseCase, SessionCleanup};
pub use complete_verification::{
    CompleteVerificationCommand, CompleteVerificationCommandError, CompleteVerificationUseCase,
    VerificationCompletion,
};
pub use identity_error::IdentityVerificationError;
pub use identity_status::{IdentityStatus, IdentityStatusUseCase};
pub use initiate_verification::{
    InitiateVerificationCommand, InitiateVerificationCommandError, InitiateVerificationUseCase,
    VerificationInitiation,
};
pub use session_progress::{AwaitAuthenticationUseCase, SessionProgress, SessionStatusUseCase};
