use std::sync::Arc;

use crate::modules::email::adapter::outgoing::{LogEmailSender, SmtpEmailSender};
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::shared::config::{optional, parse_or, required, ConfigError};

#[derive(Debug, Clone, PartialEq)]
pub enum EmailConfig {
    Relay {
        server: String,
        username: String,
        password: String,
        from: String,
    },
    Local {
        host: String,
        port: u16,
        from: String,
    },
    Log,
}

impl EmailConfig {
    /// Production requires a relay; elsewhere `SMTP_HOST` selects a local catcher
    /// and the log sender is used when nothing is configured.
    pub fn from_env(is_production: bool) -> Result<Self, ConfigError> {
        if is_production || std::env::var("SMTP_SERVER").is_ok() {
            return Ok(Self::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
                from: required("EMAIL_FROM")?,
            });
        }

        if let Ok(host) = std::env::var("SMTP_HOST") {
            return Ok(Self::Local {
                host,
                port: parse_or("SMTP_PORT", 1025)?,
                from: optional("EMAIL_FROM", "noreply@localhost"),
            });
        }

        Ok(Self::Log)
    }
}

pub fn build_email_sender(
    config: &EmailConfig,
) -> Result<Arc<dyn EmailSender + Send + Sync>, ConfigError> {
    match config {
        EmailConfig::Relay {
            server,
            username,
            password,
            from,
        } => {
            let sender = SmtpEmailSender::new(server, username, password, from).map_err(|e| {
                ConfigError::Invalid {
                    key: "SMTP_SERVER".to_string(),
                    value: e,
                }
            })?;
            Ok(Arc::new(sender))
        }
        EmailConfig::Local { host, port, from } => {
            Ok(Arc::new(SmtpEmailSender::new_local(host, *port, from)))
        }
        EmailConfig::Log => Ok(Arc::new(LogEmailSender)),
    }
}
