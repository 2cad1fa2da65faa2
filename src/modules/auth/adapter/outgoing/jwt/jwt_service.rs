use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenKind, TokenProvider,
};

use super::jwt_config::JwtConfig;

/// Clock skew tolerated on `exp` and `nbf`, in seconds.
const LEEWAY_SECS: u64 = 30;

/// HS256 tokens for the onboarding API. Access and refresh tokens share the
/// secret and differ only in `token_type` and lifetime.
#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("access_token_expiry", &self.config.access_token_expiry)
            .field("refresh_token_expiry", &self.config.refresh_token_expiry)
            .finish_non_exhaustive()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret_key.as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECS;
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            config,
        }
    }

    fn lifetime_secs(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.config.access_token_expiry,
            TokenKind::Refresh => self.config.refresh_token_expiry,
        }
    }

    fn issue(&self, kind: TokenKind, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            exp: (now + Duration::seconds(self.lifetime_secs(kind))).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            // Two tokens minted in the same second must still differ.
            jti: Uuid::new_v4(),
            token_type: kind,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

fn classify(err: JwtError) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidSignature => {
            tracing::warn!("Rejected token with a foreign signature");
            TokenError::InvalidSignature
        }
        other => {
            tracing::debug!(kind = ?other, "Rejected malformed token");
            TokenError::MalformedToken
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue(TokenKind::Access, user_id, email)
    }

    fn generate_refresh_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue(TokenKind::Refresh, user_id, email)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(classify)
    }

    fn access_token_lifetime(&self) -> Duration {
        Duration::seconds(self.lifetime_secs(TokenKind::Access))
    }

    fn refresh_token_lifetime(&self) -> Duration {
        Duration::seconds(self.lifetime_secs(TokenKind::Refresh))
    }
}
