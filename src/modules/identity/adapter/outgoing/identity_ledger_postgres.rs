use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::sea_orm_entity::verification_sessions::{
    Column as SessionColumn, Entity as SessionEntity,
};
use super::user_verification_repository_postgres::{reject_verification, upsert_verification};
use crate::modules::identity::application::domain::IdentityVerification;
use crate::modules::identity::application::ports::outgoing::{
    IdentityLedger, IdentityLedgerError, RejectionOutcome, UserVerificationRepositoryError,
};
use crate::modules::onboarding::adapter::outgoing::user_status_writer::apply_transition;
use crate::modules::onboarding::application::domain::Transition;

#[derive(Clone, Debug)]
pub struct IdentityLedgerPostgres {
    db: Arc<DatabaseConnection>,
}

impl IdentityLedgerPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> IdentityLedgerError {
    IdentityLedgerError::DatabaseError(e.to_string())
}

fn verification_error(e: UserVerificationRepositoryError) -> IdentityLedgerError {
    match e {
        UserVerificationRepositoryError::ProviderAccountTaken => {
            IdentityLedgerError::ProviderAccountTaken
        }
        other => IdentityLedgerError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl IdentityLedger for IdentityLedgerPostgres {
    async fn record_verified(
        &self,
        verification: IdentityVerification,
        verification_id: &str,
    ) -> Result<IdentityVerification, IdentityLedgerError> {
        let user_id = verification.user_id;
        let txn = self.db.begin().await.map_err(db_error)?;

        apply_transition(&txn, user_id, Transition::VerifyIdentity)
            .await
            .map_err(IdentityLedgerError::Transition)?;

        let stored = upsert_verification(&txn, verification)
            .await
            .map_err(verification_error)?;

        SessionEntity::delete_many()
            .filter(SessionColumn::VerificationId.eq(verification_id))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        info!(user_id = %user_id, verification_id, "Identity verification recorded");

        Ok(stored)
    }

    async fn record_rejection(
        &self,
        user_id: Uuid,
        reason: &str,
    ) -> Result<RejectionOutcome, IdentityLedgerError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        apply_transition(&txn, user_id, Transition::Reject)
            .await
            .map_err(IdentityLedgerError::Transition)?;

        let outcome = match reject_verification(&txn, user_id, reason).await {
            Ok(()) => RejectionOutcome::Rejected,
            Err(UserVerificationRepositoryError::NotFound) => {
                RejectionOutcome::NoVerificationRecord
            }
            Err(e) => return Err(verification_error(e)),
        };

        txn.commit().await.map_err(db_error)?;
        Ok(outcome)
    }
}
