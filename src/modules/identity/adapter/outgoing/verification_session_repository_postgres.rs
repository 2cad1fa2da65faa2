use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::verification_sessions::{
    ActiveModel as SessionActiveModel, Column as SessionColumn, Entity as SessionEntity,
};
use crate::modules::identity::application::domain::{
    NewVerificationSession, SessionStatus, VerificationSession,
};
use crate::modules::identity::application::ports::outgoing::{
    VerificationSessionRepository, VerificationSessionRepositoryError,
};

#[derive(Clone, Debug)]
pub struct VerificationSessionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VerificationSessionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> VerificationSessionRepositoryError {
    VerificationSessionRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl VerificationSessionRepository for VerificationSessionRepositoryPostgres {
    async fn create(
        &self,
        session: NewVerificationSession,
    ) -> Result<VerificationSession, VerificationSessionRepositoryError> {
        let active = SessionActiveModel {
            id: Set(Uuid::new_v4()),
            verification_id: Set(session.verification_id),
            user_id: Set(session.user_id),
            method: Set(session.method.as_str().to_string()),
            mobile_number: Set(session.mobile_number),
            status: Set(SessionStatus::Initiated.as_str().to_string()),
            flow_type: Set(session.flow_type.map(|f| f.as_str().to_string())),
            consent_url: Set(session.consent_url),
            provider_account_id: Set(session.provider_account_id),
            created_at: NotSet,
            updated_at: NotSet,
        };

        active
            .insert(&*self.db)
            .await
            .map_err(db_error)?
            .to_domain()
    }

    async fn find_by_verification_id(
        &self,
        verification_id: &str,
    ) -> Result<Option<VerificationSession>, VerificationSessionRepositoryError> {
        SessionEntity::find()
            .filter(SessionColumn::VerificationId.eq(verification_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn update_status(
        &self,
        verification_id: &str,
        status: SessionStatus,
    ) -> Result<(), VerificationSessionRepositoryError> {
        let result = SessionEntity::update_many()
            .col_expr(SessionColumn::Status, Expr::value(status.as_str()))
            .filter(SessionColumn::VerificationId.eq(verification_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(VerificationSessionRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, verification_id: &str) -> Result<(), VerificationSessionRepositoryError> {
        SessionEntity::delete_many()
            .filter(SessionColumn::VerificationId.eq(verification_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn delete_incomplete_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<u64, VerificationSessionRepositoryError> {
        // Completed sessions are deleted on completion, so every remaining row is incomplete.
        let result = SessionEntity::delete_many()
            .filter(SessionColumn::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(result.rows_affected)
    }

    async fn delete_created_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, VerificationSessionRepositoryError> {
        let result = SessionEntity::delete_many()
            .filter(SessionColumn::CreatedAt.lt(cutoff))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(result.rows_affected)
    }
}
