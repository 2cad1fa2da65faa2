mod onboarding_status;
mod select_country;

pub use onboarding_status::onboarding_status_handler;
pub use select_country::select_country_handler;
