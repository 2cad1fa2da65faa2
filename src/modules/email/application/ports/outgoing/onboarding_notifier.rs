use async_trait::async_trait;

use crate::modules::auth::application::domain::OtpPurpose;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotificationError {
    #[error("Email sending failed: {0}")]
    SendFailed(String),
}

/// Mail notifications sent along the onboarding path.
///
/// Only `send_otp` is awaited by its caller; the status-change notices are
/// dispatched in the background and their failures are logged, never surfaced.
#[async_trait]
pub trait OnboardingNotifier: Send + Sync {
    async fn send_otp(
        &self,
        to: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<(), NotificationError>;

    async fn verification_pending(&self, to: &str, username: &str)
        -> Result<(), NotificationError>;

    async fn verification_approved(
        &self,
        to: &str,
        username: &str,
    ) -> Result<(), NotificationError>;

    async fn verification_rejected(
        &self,
        to: &str,
        username: &str,
        reason: &str,
    ) -> Result<(), NotificationError>;

    async fn payment_completed(
        &self,
        to: &str,
        username: &str,
        plan_name: &str,
        amount: f64,
        currency: &str,
    ) -> Result<(), NotificationError>;

    async fn subscription_cancelled(
        &self,
        to: &str,
        username: &str,
        plan_name: &str,
    ) -> Result<(), NotificationError>;
}
