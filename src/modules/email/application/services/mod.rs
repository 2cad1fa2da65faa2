pub mod onboarding_email_service;

pub use onboarding_email_service::{spawn_notification, OnboardingEmailService};
