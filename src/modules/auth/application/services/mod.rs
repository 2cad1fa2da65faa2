pub mod issue_tokens_service;
pub mod refresh_access_token_service;
pub mod send_otp_service;
pub mod token_hasher;
pub mod verify_otp_service;

pub use issue_tokens_service::IssueTokensService;
pub use refresh_access_token_service::RefreshAccessTokenService;
pub use send_otp_service::SendOtpService;
pub use verify_otp_service::VerifyOtpService;
