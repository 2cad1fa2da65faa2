use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::modules::auth::application::domain::{OtpPurpose, OtpRedemption};
use crate::modules::auth::application::ports::incoming::use_cases::{
    OtpVerification, VerifyOtpCommand, VerifyOtpError, VerifyOtpUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    OtpAuditError, OtpAuditRepository, OtpStore,
};
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

#[derive(Clone)]
pub struct VerifyOtpService<R>
where
    R: UserRepository + Send + Sync,
{
    users: R,
    store: Arc<dyn OtpStore>,
    audit: Arc<dyn OtpAuditRepository>,
}

impl<R> VerifyOtpService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        users: R,
        store: Arc<dyn OtpStore>,
        audit: Arc<dyn OtpAuditRepository>,
    ) -> Self {
        Self {
            users,
            store,
            audit,
        }
    }
}

fn audit_error(err: OtpAuditError) -> VerifyOtpError {
    match err {
        OtpAuditError::Transition(TransitionFailure::UserNotFound) => VerifyOtpError::UserNotFound,
        OtpAuditError::Transition(TransitionFailure::Guard(guard)) => {
            VerifyOtpError::InvalidStatus(guard.to_string())
        }
        OtpAuditError::Transition(TransitionFailure::RepositoryError(msg))
        | OtpAuditError::DatabaseError(msg) => VerifyOtpError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> VerifyOtpUseCase for VerifyOtpService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: VerifyOtpCommand) -> Result<OtpVerification, VerifyOtpError> {
        let email = command.email();

        let record = match self
            .store
            .redeem(email, command.otp(), Utc::now())
            .await
            .map_err(|e| VerifyOtpError::StoreUnavailable(e.to_string()))?
        {
            OtpRedemption::Redeemed(record) => record,
            OtpRedemption::Missing => return Err(VerifyOtpError::NotFound),
            OtpRedemption::Expired => return Err(VerifyOtpError::Expired),
            OtpRedemption::AttemptsExhausted => return Err(VerifyOtpError::TooManyAttempts),
            OtpRedemption::Mismatch { attempts } => {
                debug!(attempts, "OTP mismatch");
                return Err(VerifyOtpError::InvalidOtp);
            }
        };

        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| VerifyOtpError::RepositoryError(e.to_string()))?
            .ok_or(VerifyOtpError::UserNotFound)?;

        if record.purpose == OtpPurpose::Register {
            self.audit
                .confirm_registration(user.id, &record.code, record.expires_at, record.attempts)
                .await
                .map_err(audit_error)?;
        }

        info!(user_id = %user.id, purpose = record.purpose.as_str(), "OTP verified");

        Ok(OtpVerification {
            user_id: user.id,
            email: user.email,
            purpose: record.purpose,
        })
    }
}
