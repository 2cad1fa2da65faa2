use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use serde::{Deserialize, Serialize};

use crate::modules::auth::application::domain::{
    OtpPurpose, OtpRecord, OtpRedemption, MAX_OTP_ATTEMPTS,
};
use crate::modules::auth::application::ports::outgoing::{OtpStore, OtpStoreError};

/// Redis-backed OTP store.
///
/// ## Data model
/// ```text
/// otp:{email} -> JSON { code, expires_at_ms, attempts, purpose, username }
/// ```
/// The key TTL runs a grace period past `expires_at_ms`, so a late attempt
/// is still answered with "expired" before Redis evicts the key.
///
/// ## Atomicity
/// Verification runs as one Lua script: the expiry check, the attempt cap,
/// the counter increment and the single-use delete all happen server-side
/// in a single step, so concurrent attempts cannot race on the counter.
#[derive(Clone)]
pub struct RedisOtpStore {
    pool: Arc<Pool>,
}

const GRACE_SECONDS: i64 = 600;

const REDEEM_SCRIPT: &str = r#"
local raw = redis.call('GET', KEYS[1])
if not raw then
  return {'missing'}
end
local rec = cjson.decode(raw)
if tonumber(ARGV[2]) > tonumber(rec.expires_at_ms) then
  redis.call('DEL', KEYS[1])
  return {'expired'}
end
if tonumber(rec.attempts) >= tonumber(ARGV[3]) then
  redis.call('DEL', KEYS[1])
  return {'exhausted'}
end
if rec.code ~= ARGV[1] then
  rec.attempts = tonumber(rec.attempts) + 1
  redis.call('SET', KEYS[1], cjson.encode(rec), 'KEEPTTL')
  return {'mismatch', tostring(rec.attempts)}
end
redis.call('DEL', KEYS[1])
return {'redeemed', raw}
"#;

#[derive(Debug, Serialize, Deserialize)]
struct StoredOtp {
    code: String,
    expires_at_ms: i64,
    attempts: u32,
    purpose: OtpPurpose,
    username: Option<String>,
}

impl From<&OtpRecord> for StoredOtp {
    fn from(record: &OtpRecord) -> Self {
        Self {
            code: record.code.clone(),
            expires_at_ms: record.expires_at.timestamp_millis(),
            attempts: record.attempts,
            purpose: record.purpose,
            username: record.username.clone(),
        }
    }
}

impl StoredOtp {
    fn into_record(self) -> Result<OtpRecord, OtpStoreError> {
        let expires_at = Utc
            .timestamp_millis_opt(self.expires_at_ms)
            .single()
            .ok_or_else(|| OtpStoreError::Corrupt(format!("expiry {}", self.expires_at_ms)))?;
        Ok(OtpRecord {
            code: self.code,
            expires_at,
            attempts: self.attempts,
            purpose: self.purpose,
            username: self.username,
        })
    }
}

impl RedisOtpStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key(email: &str) -> String {
        format!("otp:{email}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, OtpStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| OtpStoreError::Unavailable(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn put(&self, email: &str, record: OtpRecord) -> Result<(), OtpStoreError> {
        let ttl = (record.expires_at - Utc::now()).num_seconds() + GRACE_SECONDS;
        if ttl <= 0 {
            return Ok(());
        }

        let payload = serde_json::to_string(&StoredOtp::from(&record))
            .map_err(|e| OtpStoreError::Corrupt(e.to_string()))?;

        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(Self::key(email), payload, ttl as u64)
            .await
            .map_err(|e| OtpStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn redeem(
        &self,
        email: &str,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<OtpRedemption, OtpStoreError> {
        let mut conn = self.get_conn().await?;

        let reply: Vec<String> = deadpool_redis::redis::Script::new(REDEEM_SCRIPT)
            .key(Self::key(email))
            .arg(candidate)
            .arg(now.timestamp_millis())
            .arg(MAX_OTP_ATTEMPTS)
            .invoke_async(&mut *conn)
            .await
            .map_err(|e| OtpStoreError::Unavailable(e.to_string()))?;

        match reply.as_slice() {
            [tag] if tag == "missing" => Ok(OtpRedemption::Missing),
            [tag] if tag == "expired" => Ok(OtpRedemption::Expired),
            [tag] if tag == "exhausted" => Ok(OtpRedemption::AttemptsExhausted),
            [tag, attempts] if tag == "mismatch" => Ok(OtpRedemption::Mismatch {
                attempts: attempts
                    .parse()
                    .map_err(|_| OtpStoreError::Corrupt(format!("attempts {}", attempts)))?,
            }),
            [tag, raw] if tag == "redeemed" => {
                let stored: StoredOtp = serde_json::from_str(raw)
                    .map_err(|e| OtpStoreError::Corrupt(e.to_string()))?;
                Ok(OtpRedemption::Redeemed(stored.into_record()?))
            }
            other => Err(OtpStoreError::Corrupt(format!(
                "unexpected script reply {:?}",
                other
            ))),
        }
    }
}
