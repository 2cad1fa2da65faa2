use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::identity::application::domain::VerificationSession;
use crate::modules::identity::application::ports::outgoing::VerificationSessionRepositoryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "verification_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub verification_id: String,
    pub user_id: Uuid,
    pub method: String,
    pub mobile_number: Option<String>,
    pub status: String,
    pub flow_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub consent_url: Option<String>,
    pub provider_account_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Result<VerificationSession, VerificationSessionRepositoryError> {
        let flow_type = self
            .flow_type
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(VerificationSessionRepositoryError::DatabaseError)?;

        Ok(VerificationSession {
            verification_id: self.verification_id.clone(),
            user_id: self.user_id,
            method: self
                .method
                .parse()
                .map_err(VerificationSessionRepositoryError::DatabaseError)?,
            mobile_number: self.mobile_number.clone(),
            status: self
                .status
                .parse()
                .map_err(VerificationSessionRepositoryError::DatabaseError)?,
            flow_type,
            consent_url: self.consent_url.clone(),
            provider_account_id: self.provider_account_id.clone(),
            created_at: self.created_at.into(),
        })
    }
}
