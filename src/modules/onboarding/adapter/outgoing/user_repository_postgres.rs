use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use super::user_status_writer::write_status_guarded;
use crate::modules::onboarding::application::domain::{OnboardingStatus, Role, UserAccount};
use crate::modules::onboarding::application::ports::outgoing::{
    NewUser, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_insert_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            if err_str.contains("username") {
                return UserRepositoryError::UsernameTaken;
            }
            return UserRepositoryError::EmailTaken;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, user: NewUser) -> Result<UserAccount, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            username: Set(user.username),
            role: Set(Role::Individual.as_str().to_string()),
            status: Set(OnboardingStatus::Registered.as_str().to_string()),
            country: Set(None),
            name: Set(None),
            phone_number: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        inserted.to_account()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserAccount>, UserRepositoryError> {
        UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map(|m| m.to_account())
            .transpose()
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserRepositoryError> {
        UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map(|m| m.to_account())
            .transpose()
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError> {
        let found = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn set_country(
        &self,
        id: Uuid,
        country: &str,
    ) -> Result<UserAccount, UserRepositoryError> {
        let user = UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::NotFound)?;

        let mut active: UserActiveModel = user.into();
        active.country = Set(Some(country.to_string()));

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        updated.to_account()
    }

    async fn compare_and_set_status(
        &self,
        id: Uuid,
        expected: OnboardingStatus,
        next: OnboardingStatus,
    ) -> Result<bool, UserRepositoryError> {
        write_status_guarded(&*self.db, id, expected, next)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))
    }
}
