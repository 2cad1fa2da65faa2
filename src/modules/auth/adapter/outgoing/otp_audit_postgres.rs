use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::otp_verifications::ActiveModel as OtpVerificationActiveModel;
use crate::modules::auth::application::ports::outgoing::{OtpAuditError, OtpAuditRepository};
use crate::modules::onboarding::adapter::outgoing::user_status_writer::apply_transition;
use crate::modules::onboarding::application::domain::Transition;

#[derive(Clone, Debug)]
pub struct OtpAuditPostgres {
    db: Arc<DatabaseConnection>,
}

impl OtpAuditPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> OtpAuditError {
    OtpAuditError::DatabaseError(e.to_string())
}

#[async_trait]
impl OtpAuditRepository for OtpAuditPostgres {
    async fn confirm_registration(
        &self,
        user_id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
        attempts: u32,
    ) -> Result<(), OtpAuditError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        apply_transition(&txn, user_id, Transition::VerifyEmail)
            .await
            .map_err(OtpAuditError::Transition)?;

        OtpVerificationActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            otp: Set(code.to_string()),
            expires_at: Set(expires_at.into()),
            attempts: Set(attempts as i32),
            is_verified: Set(true),
            created_at: NotSet,
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        Ok(())
    }
}
