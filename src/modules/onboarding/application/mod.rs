pub mod domain;
pub mod onboarding_use_cases;
pub mod ports;
pub mod services;
