use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Ordered onboarding states. Declaration order is progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStatus {
    Registered,
    EmailVerified,
    IdVerified,
    VideoVerified,
    Approved,
    Active,
}

impl OnboardingStatus {
    pub const ALL: [OnboardingStatus; 6] = [
        OnboardingStatus::Registered,
        OnboardingStatus::EmailVerified,
        OnboardingStatus::IdVerified,
        OnboardingStatus::VideoVerified,
        OnboardingStatus::Approved,
        OnboardingStatus::Active,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStatus::Registered => "REGISTERED",
            OnboardingStatus::EmailVerified => "EMAIL_VERIFIED",
            OnboardingStatus::IdVerified => "ID_VERIFIED",
            OnboardingStatus::VideoVerified => "VIDEO_VERIFIED",
            OnboardingStatus::Approved => "APPROVED",
            OnboardingStatus::Active => "ACTIVE",
        }
    }

    /// Statuses already passed through to reach `self`, inclusive.
    pub fn completed_steps(&self) -> Vec<OnboardingStatus> {
        Self::ALL.iter().copied().filter(|s| s <= self).collect()
    }

    pub fn next_step(&self) -> &'static str {
        match self {
            OnboardingStatus::Registered => "Verify OTP",
            OnboardingStatus::EmailVerified => "Select Country",
            OnboardingStatus::IdVerified => "Upload Video",
            OnboardingStatus::VideoVerified => "Awaiting Admin Approval",
            OnboardingStatus::Approved => "Select Subscription Plan",
            OnboardingStatus::Active => "Welcome to Platform",
        }
    }
}

impl fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnboardingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown onboarding status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Individual,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Individual => "INDIVIDUAL",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL" => Ok(Role::Individual),
            "ADMIN" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub status: OnboardingStatus,
    pub country: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
