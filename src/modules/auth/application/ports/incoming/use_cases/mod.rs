pub mod issue_tokens;
pub mod refresh_access_token;
pub mod send_otp;
pub mod sign_in_with_otp;
pub mod verify_otp;

pub use issue_tokens::{AuthTokens, IssueTokensError, IssueTokensUseCase};
pub use refresh_access_token::{
    RefreshAccessTokenCommand, RefreshAccessTokenCommandError, RefreshAccessTokenError,
    RefreshAccessTokenUseCase, RefreshedAccessToken,
};
pub use send_otp::{
    OtpDispatch, SendOtpCommand, SendOtpCommandError, SendOtpError, SendOtpUseCase,
};
pub use sign_in_with_otp::{SignInResult, SignInWithOtpError, SignInWithOtpUseCase};
pub use verify_otp::{
    OtpVerification, VerifyOtpCommand, VerifyOtpCommandError, VerifyOtpError, VerifyOtpUseCase,
};
