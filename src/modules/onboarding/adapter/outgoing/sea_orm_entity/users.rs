use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::UserAccount;
use crate::modules::onboarding::application::ports::outgoing::UserRepositoryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub role: String,
    pub status: String,
    pub country: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_account(&self) -> Result<UserAccount, UserRepositoryError> {
        Ok(UserAccount {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            role: self
                .role
                .parse()
                .map_err(UserRepositoryError::DatabaseError)?,
            status: self
                .status
                .parse()
                .map_err(UserRepositoryError::DatabaseError)?,
            country: self.country.clone(),
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
