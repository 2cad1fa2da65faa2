pub mod get_onboarding_status_service;
pub mod select_country_service;
pub mod state_machine_service;

pub use get_onboarding_status_service::GetOnboardingStatusService;
pub use select_country_service::SelectCountryService;
pub use state_machine_service::OnboardingStateMachineService;
