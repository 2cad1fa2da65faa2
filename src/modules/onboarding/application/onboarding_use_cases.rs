use std::sync::Arc;

use super::ports::incoming::use_cases::{GetOnboardingStatusUseCase, SelectCountryUseCase};

#[derive(Clone)]
pub struct OnboardingUseCases {
    pub select_country: Arc<dyn SelectCountryUseCase>,
    pub status: Arc<dyn GetOnboardingStatusUseCase>,
}
