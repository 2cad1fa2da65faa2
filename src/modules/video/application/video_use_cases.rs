use std::sync::Arc;

use super::ports::incoming::use_cases::{SubmitVideoUseCase, VideoStatusUseCase};

#[derive(Clone)]
pub struct VideoUseCases {
    pub submit: Arc<dyn SubmitVideoUseCase>,
    pub status: Arc<dyn VideoStatusUseCase>,
}
