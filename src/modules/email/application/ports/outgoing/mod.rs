pub mod email_sender;
pub mod onboarding_notifier;

pub use email_sender::EmailSender;
pub use onboarding_notifier::{NotificationError, OnboardingNotifier};
