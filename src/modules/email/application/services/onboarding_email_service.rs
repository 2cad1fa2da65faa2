use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::{OtpPurpose, OTP_TTL_MINUTES};
use crate::modules::email::application::ports::outgoing::{
    EmailSender, NotificationError, OnboardingNotifier,
};

/// Plain-text onboarding notifications rendered on top of an [`EmailSender`].
#[derive(Clone)]
pub struct OnboardingEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_name: String,
}

impl fmt::Debug for OnboardingEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl OnboardingEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_name: impl Into<String>) -> Self {
        Self {
            sender,
            app_name: app_name.into(),
        }
    }

    async fn deliver(&self, to: &str, subject: &str, body: String) -> Result<(), NotificationError> {
        self.sender
            .send_email(to, subject, &body)
            .await
            .map_err(NotificationError::SendFailed)
    }
}

#[async_trait]
impl OnboardingNotifier for OnboardingEmailService {
    async fn send_otp(
        &self,
        to: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<(), NotificationError> {
        let (subject, intro) = match purpose {
            OtpPurpose::Register => (
                format!("Verify your {} account", self.app_name),
                "Use the code below to verify your email address.",
            ),
            OtpPurpose::Login => (
                format!("Your {} sign-in code", self.app_name),
                "Use the code below to sign in.",
            ),
        };

        let body = format!(
            "{intro}\n\n    {code}\n\nThe code expires in {OTP_TTL_MINUTES} minutes. \
             If you did not request it, you can ignore this email."
        );

        self.deliver(to, &subject, body).await
    }

    async fn verification_pending(
        &self,
        to: &str,
        username: &str,
    ) -> Result<(), NotificationError> {
        let body = format!(
            "Hi {username},\n\nYour verification documents were received and are now \
             waiting for review by our team. We will email you once a decision is made."
        );
        self.deliver(to, "Verification submitted", body).await
    }

    async fn verification_approved(
        &self,
        to: &str,
        username: &str,
    ) -> Result<(), NotificationError> {
        let body = format!(
            "Hi {username},\n\nYour account has been approved. \
             You can now choose a subscription plan to activate {}.",
            self.app_name
        );
        self.deliver(to, "Your account is approved", body).await
    }

    async fn verification_rejected(
        &self,
        to: &str,
        username: &str,
        reason: &str,
    ) -> Result<(), NotificationError> {
        let body = format!(
            "Hi {username},\n\nWe could not approve your verification.\n\n\
             Reason: {reason}\n\nPlease sign in and restart the verification process."
        );
        self.deliver(to, "Verification rejected", body).await
    }

    async fn payment_completed(
        &self,
        to: &str,
        username: &str,
        plan_name: &str,
        amount: f64,
        currency: &str,
    ) -> Result<(), NotificationError> {
        let body = format!(
            "Hi {username},\n\nWe received your payment of {amount:.2} {currency} \
             for the {plan_name} plan. Your subscription is now active."
        );
        self.deliver(to, "Payment received", body).await
    }

    async fn subscription_cancelled(
        &self,
        to: &str,
        username: &str,
        plan_name: &str,
    ) -> Result<(), NotificationError> {
        let body = format!(
            "Hi {username},\n\nYour {plan_name} subscription has been cancelled. \
             You can subscribe again at any time."
        );
        self.deliver(to, "Subscription cancelled", body).await
    }
}

/// Runs a notification without holding up the caller. Failures are logged.
pub fn spawn_notification<F>(kind: &'static str, notification: F)
where
    F: Future<Output = Result<(), NotificationError>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = notification.await {
            tracing::warn!(notification = kind, "Notification not delivered: {}", e);
        }
    });
}
