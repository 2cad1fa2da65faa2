use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::identity::application::domain::IdentityVerification;
use crate::modules::identity::application::ports::outgoing::UserVerificationRepositoryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_verifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub method: String,
    pub status: String,
    #[sea_orm(unique)]
    pub provider_account_id: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub verified_data: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub rejection_reason: Option<String>,
    pub verified_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Result<IdentityVerification, UserVerificationRepositoryError> {
        Ok(IdentityVerification {
            user_id: self.user_id,
            method: self
                .method
                .parse()
                .map_err(UserVerificationRepositoryError::DatabaseError)?,
            status: self
                .status
                .parse()
                .map_err(UserVerificationRepositoryError::DatabaseError)?,
            provider_account_id: self.provider_account_id.clone(),
            verified_data: self.verified_data.clone(),
            rejection_reason: self.rejection_reason.clone(),
            verified_at: self.verified_at.map(Into::into),
        })
    }
}
