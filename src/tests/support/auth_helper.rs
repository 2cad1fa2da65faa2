use actix_web::web;
use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenKind, TokenProvider};

pub const TEST_TOKEN: &str = "test-token";

/// Accepts only `TEST_TOKEN` and resolves it to a fixed user.
struct StaticTokenProvider {
    user_id: Uuid,
    token_type: TokenKind,
}

impl TokenProvider for StaticTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _email: &str) -> Result<String, TokenError> {
        Ok(TEST_TOKEN.to_string())
    }

    fn generate_refresh_token(&self, _user_id: Uuid, _email: &str) -> Result<String, TokenError> {
        Ok(TEST_TOKEN.to_string())
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token != TEST_TOKEN {
            return Err(TokenError::InvalidSignature);
        }
        Ok(TokenClaims {
            sub: self.user_id,
            email: "user@example.com".to_string(),
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            jti: Uuid::new_v4(),
            token_type: self.token_type,
        })
    }

    fn access_token_lifetime(&self) -> Duration {
        Duration::minutes(15)
    }

    fn refresh_token_lifetime(&self) -> Duration {
        Duration::days(7)
    }
}

fn provider(
    user_id: Uuid,
    token_type: TokenKind,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StaticTokenProvider {
        user_id,
        token_type,
    });
    web::Data::new(provider)
}

pub fn token_provider_for(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    provider(user_id, TokenKind::Access)
}

pub fn refresh_token_provider_for(
    user_id: Uuid,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    provider(user_id, TokenKind::Refresh)
}
