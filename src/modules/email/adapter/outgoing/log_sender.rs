use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::EmailSender;

/// Writes outgoing mail to the log instead of delivering it.
/// Used when no SMTP transport is configured outside production.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        tracing::info!(to = %to, subject = %subject, "Email (not delivered):\n{}", body);
        Ok(())
    }
}
