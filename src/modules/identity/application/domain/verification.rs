use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::VerificationMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Verified,
    Rejected,
    Pending,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::Rejected => "REJECTED",
            VerificationStatus::Pending => "PENDING",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERIFIED" => Ok(VerificationStatus::Verified),
            "REJECTED" => Ok(VerificationStatus::Rejected),
            "PENDING" => Ok(VerificationStatus::Pending),
            other => Err(format!("Unknown verification status: {}", other)),
        }
    }
}

/// One per user. `provider_account_id` is unique across users.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityVerification {
    pub user_id: Uuid,
    pub method: VerificationMethod,
    pub status: VerificationStatus,
    pub provider_account_id: Option<String>,
    pub verified_data: Option<serde_json::Value>,
    pub rejection_reason: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl IdentityVerification {
    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }

    /// True when the provider identity is already bound to someone else.
    pub fn claimed_by_other(&self, user_id: Uuid) -> bool {
        self.user_id != user_id
    }
}
