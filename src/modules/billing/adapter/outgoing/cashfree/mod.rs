mod config;
mod gateway;

pub use config::CashfreeConfig;
pub use gateway::CashfreeGateway;
