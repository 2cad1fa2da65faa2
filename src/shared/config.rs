use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: String, value: String },
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::other(err.to_string())
    }
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_env_files() -> String {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
    env_name
}

pub fn required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key.to_string()))
}

pub fn optional(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub frontend_url: String,
    pub otp_store: String,
}

impl AppConfig {
    pub fn from_env(environment: String) -> Result<Self, ConfigError> {
        Ok(Self {
            environment,
            host: required("HOST")?,
            port: parse_or("PORT", 8080)?,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            frontend_url: optional("FRONTEND_URL", "http://localhost:3000"),
            otp_store: optional("OTP_STORE", "redis"),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
