use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::user_verifications::{
    ActiveModel as VerificationActiveModel, Column as VerificationColumn,
    Entity as VerificationEntity,
};
use crate::modules::identity::application::domain::{IdentityVerification, VerificationStatus};
use crate::modules::identity::application::ports::outgoing::{
    UserVerificationRepository, UserVerificationRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserVerificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserVerificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_write_error(e: sea_orm::DbErr) -> UserVerificationRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if (err_str.contains("23505") || err_str.contains("duplicate key"))
        && err_str.contains("provider_account_id")
    {
        return UserVerificationRepositoryError::ProviderAccountTaken;
    }
    UserVerificationRepositoryError::DatabaseError(e.to_string())
}

fn db_error(e: sea_orm::DbErr) -> UserVerificationRepositoryError {
    UserVerificationRepositoryError::DatabaseError(e.to_string())
}

/// Inserts or replaces the user's record on an existing connection or transaction.
pub(crate) async fn upsert_verification<C: ConnectionTrait>(
    conn: &C,
    verification: IdentityVerification,
) -> Result<IdentityVerification, UserVerificationRepositoryError> {
    let existing = VerificationEntity::find()
        .filter(VerificationColumn::UserId.eq(verification.user_id))
        .one(conn)
        .await
        .map_err(db_error)?;

    let method = verification.method.as_str().to_string();
    let status = verification.status.as_str().to_string();
    let verified_at = verification.verified_at.map(Into::into);

    let saved = match existing {
        Some(row) => {
            let mut active: VerificationActiveModel = row.into();
            active.method = Set(method);
            active.status = Set(status);
            active.provider_account_id = Set(verification.provider_account_id);
            active.verified_data = Set(verification.verified_data);
            active.rejection_reason = Set(verification.rejection_reason);
            active.verified_at = Set(verified_at);
            active.update(conn).await
        }
        None => {
            VerificationActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(verification.user_id),
                method: Set(method),
                status: Set(status),
                provider_account_id: Set(verification.provider_account_id),
                verified_data: Set(verification.verified_data),
                rejection_reason: Set(verification.rejection_reason),
                verified_at: Set(verified_at),
                created_at: NotSet,
                updated_at: NotSet,
            }
            .insert(conn)
            .await
        }
    }
    .map_err(map_write_error)?;

    saved.to_domain()
}

pub(crate) async fn reject_verification<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    reason: &str,
) -> Result<(), UserVerificationRepositoryError> {
    let row = VerificationEntity::find()
        .filter(VerificationColumn::UserId.eq(user_id))
        .one(conn)
        .await
        .map_err(db_error)?
        .ok_or(UserVerificationRepositoryError::NotFound)?;

    let mut active: VerificationActiveModel = row.into();
    active.status = Set(VerificationStatus::Rejected.as_str().to_string());
    active.rejection_reason = Set(Some(reason.to_string()));
    active.update(conn).await.map_err(db_error)?;
    Ok(())
}

#[async_trait]
impl UserVerificationRepository for UserVerificationRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<IdentityVerification>, UserVerificationRepositoryError> {
        VerificationEntity::find()
            .filter(VerificationColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn find_by_provider_account(
        &self,
        provider_account_id: &str,
    ) -> Result<Option<IdentityVerification>, UserVerificationRepositoryError> {
        VerificationEntity::find()
            .filter(VerificationColumn::ProviderAccountId.eq(provider_account_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain())
            .transpose()
    }

    async fn upsert(
        &self,
        verification: IdentityVerification,
    ) -> Result<IdentityVerification, UserVerificationRepositoryError> {
        upsert_verification(&*self.db, verification).await
    }

    async fn mark_rejected(
        &self,
        user_id: Uuid,
        reason: &str,
    ) -> Result<(), UserVerificationRepositoryError> {
        reject_verification(&*self.db, user_id, reason).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::identity::adapter::outgoing::sea_orm_entity::user_verifications::Model;
    use crate::modules::onboarding::application::domain::VerificationMethod;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn model(user_id: Uuid, status: &str) -> Model {
        Model {
            id: Uuid::new_v4(),
            user_id,
            method: "DIGILOCKER".to_string(),
            status: status.to_string(),
            provider_account_id: Some("dl-1".to_string()),
            verified_data: Some(serde_json::json!({ "uid": "xxxx" })),
            rejection_reason: None,
            verified_at: Some(Utc::now().into()),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn verified(user_id: Uuid) -> IdentityVerification {
        IdentityVerification {
            user_id,
            method: VerificationMethod::Digilocker,
            status: VerificationStatus::Verified,
            provider_account_id: Some("dl-1".to_string()),
            verified_data: None,
            rejection_reason: None,
            verified_at: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn find_by_user_maps_row() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(user_id, "VERIFIED")]])
            .into_connection();
        let repo = UserVerificationRepositoryPostgres::new(Arc::new(db));

        let found = repo.find_by_user(user_id).await.unwrap().unwrap();

        assert!(found.is_verified());
        assert_eq!(found.method, VerificationMethod::Digilocker);
    }

    #[tokio::test]
    async fn upsert_inserts_when_absent() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .append_query_results(vec![vec![model(user_id, "VERIFIED")]])
            .into_connection();
        let repo = UserVerificationRepositoryPostgres::new(Arc::new(db));

        let saved = repo.upsert(verified(user_id)).await.unwrap();

        assert_eq!(saved.user_id, user_id);
    }

    #[tokio::test]
    async fn upsert_maps_provider_account_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"user_verifications_provider_account_id_key\"".into(),
            )])
            .into_connection();
        let repo = UserVerificationRepositoryPostgres::new(Arc::new(db));

        let result = repo.upsert(verified(Uuid::new_v4())).await;

        assert_eq!(
            result,
            Err(UserVerificationRepositoryError::ProviderAccountTaken)
        );
    }

    #[tokio::test]
    async fn mark_rejected_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = UserVerificationRepositoryPostgres::new(Arc::new(db));

        let result = repo.mark_rejected(Uuid::new_v4(), "blurry video").await;

        assert_eq!(result, Err(UserVerificationRepositoryError::NotFound));
    }
}
