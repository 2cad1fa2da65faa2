use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::{OtpRecord, OtpRedemption};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OtpStoreError {
    #[error("OTP store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt OTP record: {0}")]
    Corrupt(String),
}

/// Live OTP records keyed by normalized email.
///
/// `redeem` is a single atomic read-modify-write per key: concurrent
/// attempts for the same email can never push the attempt counter past
/// the cap or redeem one code twice.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Replaces any record already held for `email`.
    async fn put(&self, email: &str, record: OtpRecord) -> Result<(), OtpStoreError>;

    async fn redeem(
        &self,
        email: &str,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<OtpRedemption, OtpStoreError>;
}
