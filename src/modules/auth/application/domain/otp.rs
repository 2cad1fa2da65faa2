use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const OTP_TTL_MINUTES: i64 = 10;
pub const MAX_OTP_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    Register,
    Login,
}

impl OtpPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Register => "register",
            OtpPurpose::Login => "login",
        }
    }
}

/// The live code for one email address. A newer record replaces an older one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpRecord {
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub attempts: u32,
    pub purpose: OtpPurpose,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpCheck {
    Expired,
    AttemptsExhausted,
    Mismatch,
    Match,
}

/// Outcome of one atomic verification attempt against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum OtpRedemption {
    Missing,
    Expired,
    AttemptsExhausted,
    Mismatch { attempts: u32 },
    Redeemed(OtpRecord),
}

impl OtpRecord {
    pub fn issue(
        code: String,
        purpose: OtpPurpose,
        username: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
            attempts: 0,
            purpose,
            username,
        }
    }

    /// Expiry wins over the attempt cap, which wins over the code comparison.
    /// The comparison is an exact, case-sensitive string match.
    pub fn check(&self, candidate: &str, now: DateTime<Utc>) -> OtpCheck {
        if now > self.expires_at {
            OtpCheck::Expired
        } else if self.attempts >= MAX_OTP_ATTEMPTS {
            OtpCheck::AttemptsExhausted
        } else if self.code != candidate {
            OtpCheck::Mismatch
        } else {
            OtpCheck::Match
        }
    }
}

pub fn generate_otp_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
