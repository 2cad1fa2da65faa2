use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::video::application::domain::VideoSubmission;
use crate::modules::video::application::ports::outgoing::VideoSubmissionRepositoryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "video_verifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub photo_url: String,
    #[sea_orm(column_type = "Text")]
    pub video_url: String,
    pub status: String,
    pub submitted_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Result<VideoSubmission, VideoSubmissionRepositoryError> {
        Ok(VideoSubmission {
            user_id: self.user_id,
            photo_url: self.photo_url.clone(),
            video_url: self.video_url.clone(),
            status: self
                .status
                .parse()
                .map_err(VideoSubmissionRepositoryError::DatabaseError)?,
            submitted_at: self.submitted_at.into(),
        })
    }
}
