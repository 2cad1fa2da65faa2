pub mod admin;
pub mod auth;
pub mod billing;
pub mod email;
pub mod identity;
pub mod onboarding;
pub mod reconciliation;
pub mod video;
