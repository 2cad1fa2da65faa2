pub mod sea_orm_entity;
pub mod video_submission_repository_postgres;

pub use video_submission_repository_postgres::VideoSubmissionRepositoryPostgres;
