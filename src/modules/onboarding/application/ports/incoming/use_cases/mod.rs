pub mod advance_status;
pub mod get_onboarding_status;
pub mod select_country;

pub use advance_status::{OnboardingStateMachine, TransitionFailure};
pub use get_onboarding_status::{
    GetOnboardingStatusError, GetOnboardingStatusUseCase, OnboardingDetails, OnboardingProgress,
};
pub use select_country::{
    CountrySelection, SelectCountryCommand, SelectCountryCommandError, SelectCountryError,
    SelectCountryUseCase,
};
