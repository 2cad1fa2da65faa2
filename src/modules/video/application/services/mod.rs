pub mod submit_video_service;
pub mod video_status_service;

pub use submit_video_service::SubmitVideoService;
pub use video_status_service::VideoStatusService;
