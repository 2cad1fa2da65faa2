use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::video_verifications::{
    ActiveModel as VideoActiveModel, Column as VideoColumn, Entity as VideoEntity,
};
use crate::modules::video::application::domain::{NewVideoSubmission, VideoSubmission};
use crate::modules::video::application::ports::outgoing::{
    VideoSubmissionRepository, VideoSubmissionRepositoryError,
};

#[derive(Clone, Debug)]
pub struct VideoSubmissionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VideoSubmissionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> VideoSubmissionRepositoryError {
    VideoSubmissionRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl VideoSubmissionRepository for VideoSubmissionRepositoryPostgres {
    async fn save(
        &self,
        submission: NewVideoSubmission,
    ) -> Result<VideoSubmission, VideoSubmissionRepositoryError> {
        let existing = VideoEntity::find()
            .filter(VideoColumn::UserId.eq(submission.user_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        let saved = match existing {
            Some(row) => {
                let mut active: VideoActiveModel = row.into();
                active.photo_url = Set(submission.photo_url);
                active.video_url = Set(submission.video_url);
                active.status = Set(submission.status.as_str().to_string());
                active.submitted_at = Set(Utc::now().into());
                active.update(&*self.db).await
            }
            None => {
                VideoActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(submission.user_id),
                    photo_url: Set(submission.photo_url),
                    video_url: Set(submission.video_url),
                    status: Set(submission.status.as_str().to_string()),
                    submitted_at: Set(Utc::now().into()),
                }
                .insert(&*self.db)
                .await
            }
        }
        .map_err(db_error)?;

        saved.to_domain()
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VideoSubmission>, VideoSubmissionRepositoryError> {
        VideoEntity::find()
            .filter(VideoColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain())
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::video::adapter::outgoing::sea_orm_entity::video_verifications::Model;
    use crate::modules::video::application::domain::VideoStatus;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn model(user_id: Uuid) -> Model {
        Model {
            id: Uuid::new_v4(),
            user_id,
            photo_url: "https://cdn/p.jpg".to_string(),
            video_url: "https://cdn/v.mp4".to_string(),
            status: "VERIFIED".to_string(),
            submitted_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn save_inserts_first_submission() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .append_query_results(vec![vec![model(user_id)]])
            .into_connection();
        let repo = VideoSubmissionRepositoryPostgres::new(Arc::new(db));

        let saved = repo
            .save(NewVideoSubmission {
                user_id,
                photo_url: "https://cdn/p.jpg".to_string(),
                video_url: "https://cdn/v.mp4".to_string(),
                status: VideoStatus::Verified,
            })
            .await
            .unwrap();

        assert_eq!(saved.status, VideoStatus::Verified);
    }

    #[tokio::test]
    async fn find_by_user_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = VideoSubmissionRepositoryPostgres::new(Arc::new(db));

        assert!(repo.find_by_user(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = VideoSubmissionRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.find_by_user(Uuid::new_v4()).await,
            Err(VideoSubmissionRepositoryError::DatabaseError(_))
        ));
    }
}
