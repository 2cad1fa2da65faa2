pub mod email_config;
pub mod log_sender;
pub mod smtp_sender;

pub use email_config::{build_email_sender, EmailConfig};
pub use log_sender::LogEmailSender;
pub use smtp_sender::SmtpEmailSender;
