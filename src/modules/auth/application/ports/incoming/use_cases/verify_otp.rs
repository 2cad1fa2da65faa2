use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::modules::auth::application::domain::{normalize_email, OtpPurpose};

#[derive(Debug, Clone)]
pub struct VerifyOtpCommand {
    email: String,
    otp: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyOtpCommandError {
    #[error("A valid email address is required")]
    InvalidEmail,

    #[error("OTP must be exactly 6 digits")]
    InvalidOtpFormat,
}

impl VerifyOtpCommand {
    pub fn new(email: String, otp: String) -> Result<Self, VerifyOtpCommandError> {
        let email = normalize_email(&email);
        if !EmailAddress::is_valid(&email) {
            return Err(VerifyOtpCommandError::InvalidEmail);
        }

        let otp = otp.trim().to_string();
        if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(VerifyOtpCommandError::InvalidOtpFormat);
        }

        Ok(Self { email, otp })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OtpVerification {
    pub user_id: Uuid,
    pub email: String,
    pub purpose: OtpPurpose,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("No OTP found for this email")]
    NotFound,

    #[error("OTP has expired")]
    Expired,

    #[error("Too many failed attempts. Request a new OTP.")]
    TooManyAttempts,

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    InvalidStatus(String),

    #[error("OTP store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifyOtpUseCase: Send + Sync {
    async fn execute(&self, command: VerifyOtpCommand) -> Result<OtpVerification, VerifyOtpError>;
}
