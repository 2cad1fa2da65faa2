use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::{normalize_email, OtpPurpose};

#[derive(Debug, Clone)]
pub struct SendOtpCommand {
    email: String,
    username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendOtpCommandError {
    #[error("A valid email address is required")]
    InvalidEmail,

    #[error("Username must be 3-30 characters of letters, digits or underscores")]
    InvalidUsername,
}

impl SendOtpCommand {
    /// A non-blank username marks the request as a registration.
    pub fn new(email: String, username: Option<String>) -> Result<Self, SendOtpCommandError> {
        let email = normalize_email(&email);
        if !EmailAddress::is_valid(&email) {
            return Err(SendOtpCommandError::InvalidEmail);
        }

        let username = username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        if let Some(name) = &username {
            let valid_chars = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid_chars || !(3..=30).contains(&name.len()) {
                return Err(SendOtpCommandError::InvalidUsername);
            }
        }

        Ok(Self { email, username })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn purpose(&self) -> OtpPurpose {
        if self.username.is_some() {
            OtpPurpose::Register
        } else {
            OtpPurpose::Login
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OtpDispatch {
    pub user_id: Uuid,
    pub purpose: OtpPurpose,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendOtpError {
    #[error("User already exists with this email")]
    UserAlreadyExists,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("User not found. Please register first.")]
    UserNotFound,

    #[error("Please verify your email first.")]
    EmailNotVerified,

    #[error("OTP store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendOtpUseCase: Send + Sync {
    async fn execute(&self, command: SendOtpCommand) -> Result<OtpDispatch, SendOtpError>;
}
