use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::refresh_tokens::{
    ActiveModel as RefreshTokenActiveModel, Column as RefreshTokenColumn,
    Entity as RefreshTokenEntity,
};
use crate::modules::auth::application::ports::outgoing::{
    RefreshTokenRepository, RefreshTokenRepositoryError,
};

#[derive(Clone, Debug)]
pub struct RefreshTokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RefreshTokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RefreshTokenRepository for RefreshTokenRepositoryPostgres {
    async fn store(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RefreshTokenRepositoryError> {
        RefreshTokenActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token_hash: Set(token_hash.to_string()),
            expires_at: Set(expires_at.into()),
            created_at: NotSet,
        }
        .insert(&*self.db)
        .await
        .map_err(|e| RefreshTokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn is_active(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, RefreshTokenRepositoryError> {
        let found = RefreshTokenEntity::find()
            .filter(RefreshTokenColumn::TokenHash.eq(token_hash))
            .filter(RefreshTokenColumn::ExpiresAt.gt(now))
            .one(&*self.db)
            .await
            .map_err(|e| RefreshTokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }
}
