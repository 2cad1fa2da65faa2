mod config;
mod provider;

pub use config::DigilockerConfig;
pub use provider::DigilockerProvider;
