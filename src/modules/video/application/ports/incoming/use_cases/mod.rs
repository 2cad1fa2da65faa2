pub mod submit_video;
pub mod video_status;

pub use submit_video::{
    SubmitVideoCommand, SubmitVideoCommandError, SubmitVideoUseCase, VideoSubmissionOutcome,
    VideoVerificationError,
};
pub use video_status::VideoStatusUseCase;
