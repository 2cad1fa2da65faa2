use crate::shared::config::{optional, parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                value: "must be at least 32 characters".to_string(),
            });
        }

        let access_token_expiry = parse_or("JWT_ACCESS_EXPIRY", 604_800)?;
        let refresh_token_expiry = parse_or("JWT_REFRESH_EXPIRY", 2_592_000)?;

        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY".to_string(),
                value: access_token_expiry.to_string(),
            });
        }
        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY".to_string(),
                value: format!("{} (must exceed JWT_ACCESS_EXPIRY)", refresh_token_expiry),
            });
        }

        Ok(Self {
            secret_key,
            issuer: optional("JWT_ISSUER", "onboarding-backend"),
            access_token_expiry,
            refresh_token_expiry,
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
            issuer: "test_issuer".to_string(),
            access_token_expiry: 604_800,
            refresh_token_expiry: 2_592_000,
        }
    }
}
