pub mod video_submission_repository;

pub use video_submission_repository::{VideoSubmissionRepository, VideoSubmissionRepositoryError};
