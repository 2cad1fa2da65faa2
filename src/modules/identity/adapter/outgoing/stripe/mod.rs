mod config;
mod provider;

pub use config::StripeIdentityConfig;
pub use provider::StripeIdentityProvider;
