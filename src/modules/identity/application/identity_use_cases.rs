use std::sync::Arc;

use super::ports::incoming::use_cases::{
    AwaitAuthenticationUseCase, CleanupExpiredSessionsUseCase, CompleteVerificationUseCase,
    IdentityStatusUseCase, InitiateVerificationUseCase, SessionStatusUseCase,
};

#[derive(Clone)]
pub struct IdentityUseCases {
    pub initiate: Arc<dyn InitiateVerificationUseCase>,
    pub callback: Arc<dyn AwaitAuthenticationUseCase>,
    pub session_status: Arc<dyn SessionStatusUseCase>,
    pub complete: Arc<dyn CompleteVerificationUseCase>,
    pub status: Arc<dyn IdentityStatusUseCase>,
    pub cleanup: Arc<dyn CleanupExpiredSessionsUseCase>,
}
