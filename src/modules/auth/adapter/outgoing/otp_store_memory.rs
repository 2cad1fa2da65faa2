use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::modules::auth::application::domain::{OtpCheck, OtpRecord, OtpRedemption};
use crate::modules::auth::application::ports::outgoing::{OtpStore, OtpStoreError};

/// Process-local OTP store for development and tests.
///
/// A single mutex serializes every read-modify-write. Records are kept a
/// little past their expiry so a late attempt still reports "expired",
/// then swept on the next write.
#[derive(Default)]
pub struct InMemoryOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

const RETENTION_AFTER_EXPIRY_MINUTES: i64 = 10;

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn put(&self, email: &str, record: OtpRecord) -> Result<(), OtpStoreError> {
        let mut records = self.records.lock().await;
        let cutoff = Utc::now() - Duration::minutes(RETENTION_AFTER_EXPIRY_MINUTES);
        records.retain(|_, r| r.expires_at > cutoff);
        records.insert(email.to_string(), record);
        Ok(())
    }

    async fn redeem(
        &self,
        email: &str,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<OtpRedemption, OtpStoreError> {
        let mut records = self.records.lock().await;

        let Some(record) = records.get_mut(email) else {
            return Ok(OtpRedemption::Missing);
        };

        let outcome = match record.check(candidate, now) {
            OtpCheck::Expired => {
                records.remove(email);
                OtpRedemption::Expired
            }
            OtpCheck::AttemptsExhausted => {
                records.remove(email);
                OtpRedemption::AttemptsExhausted
            }
            OtpCheck::Mismatch => {
                record.attempts += 1;
                OtpRedemption::Mismatch {
                    attempts: record.attempts,
                }
            }
            OtpCheck::Match => match records.remove(email) {
                Some(redeemed) => OtpRedemption::Redeemed(redeemed),
                None => OtpRedemption::Missing,
            },
        };

        Ok(outcome)
    }
}
