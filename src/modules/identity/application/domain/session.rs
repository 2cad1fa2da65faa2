use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::VerificationMethod;

/// Sessions older than this are reaped by the cleanup sweep.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Initiated,
    Authenticated,
    Pending,
    Expired,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Initiated => "INITIATED",
            SessionStatus::Authenticated => "AUTHENTICATED",
            SessionStatus::Pending => "PENDING",
            SessionStatus::Expired => "EXPIRED",
        }
    }

    /// Still waiting on the provider, so a poll may move it forward.
    pub fn is_awaiting_provider(&self) -> bool {
        matches!(self, SessionStatus::Initiated | SessionStatus::Pending)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INITIATED" => Ok(SessionStatus::Initiated),
            "AUTHENTICATED" => Ok(SessionStatus::Authenticated),
            "PENDING" => Ok(SessionStatus::Pending),
            "EXPIRED" => Ok(SessionStatus::Expired),
            other => Err(format!("Unknown session status: {}", other)),
        }
    }
}

/// Locker consent flow: `signin` for an existing locker account, `signup` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Signin,
    Signup,
}

impl FlowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowType::Signin => "signin",
            FlowType::Signup => "signup",
        }
    }
}

impl FromStr for FlowType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signin" => Ok(FlowType::Signin),
            "signup" => Ok(FlowType::Signup),
            other => Err(format!("Unknown flow type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationSession {
    pub verification_id: String,
    pub user_id: Uuid,
    pub method: VerificationMethod,
    pub mobile_number: Option<String>,
    pub status: SessionStatus,
    pub flow_type: Option<FlowType>,
    pub consent_url: Option<String>,
    pub provider_account_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VerificationSession {
    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVerificationSession {
    pub verification_id: String,
    pub user_id: Uuid,
    pub method: VerificationMethod,
    pub mobile_number: Option<String>,
    pub flow_type: Option<FlowType>,
    pub consent_url: Option<String>,
    pub provider_account_id: Option<String>,
}

/// `VER_{epoch_millis}_{8 uppercase hex}`
pub fn generate_verification_id(now: DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen();
    format!("VER_{}_{:08X}", now.timestamp_millis(), suffix)
}
