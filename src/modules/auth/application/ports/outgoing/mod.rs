pub mod otp_audit_repository;
pub mod otp_store;
pub mod refresh_token_repository;
pub mod token_provider;

pub use otp_audit_repository::{OtpAuditError, OtpAuditRepository};
pub use otp_store::{OtpStore, OtpStoreError};
pub use refresh_token_repository::{RefreshTokenRepository, RefreshTokenRepositoryError};
pub use token_provider::{TokenClaims, TokenError, TokenKind, TokenProvider};
