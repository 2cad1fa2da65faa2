use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::token_hasher::hash_token;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RefreshAccessTokenCommand, RefreshAccessTokenError, RefreshAccessTokenUseCase,
    RefreshedAccessToken,
};
use crate::modules::auth::application::ports::outgoing::{
    RefreshTokenRepository, TokenKind, TokenProvider,
};

#[derive(Clone)]
pub struct RefreshAccessTokenService<R>
where
    R: RefreshTokenRepository + Send + Sync,
{
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    refresh_tokens: R,
}

impl<R> RefreshAccessTokenService<R>
where
    R: RefreshTokenRepository + Send + Sync,
{
    pub fn new(tokens: Arc<dyn TokenProvider + Send + Sync>, refresh_tokens: R) -> Self {
        Self {
            tokens,
            refresh_tokens,
        }
    }
}

#[async_trait]
impl<R> RefreshAccessTokenUseCase for RefreshAccessTokenService<R>
where
    R: RefreshTokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RefreshAccessTokenCommand,
    ) -> Result<RefreshedAccessToken, RefreshAccessTokenError> {
        let claims = self
            .tokens
            .verify_token_of(command.refresh_token(), TokenKind::Refresh)
            .map_err(|e| {
                debug!("Refresh token rejected: {}", e);
                RefreshAccessTokenError::InvalidRefreshToken
            })?;

        let active = self
            .refresh_tokens
            .is_active(&hash_token(command.refresh_token()), Utc::now())
            .await
            .map_err(|e| RefreshAccessTokenError::RepositoryError(e.to_string()))?;
        if !active {
            return Err(RefreshAccessTokenError::InvalidRefreshToken);
        }

        let access_token = self
            .tokens
            .generate_access_token(claims.sub, &claims.email)
            .map_err(|e| RefreshAccessTokenError::TokenGeneration(e.to_string()))?;

        Ok(RefreshedAccessToken {
            access_token,
            expires_in: self.tokens.access_token_lifetime().num_seconds(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::application::ports::outgoing::RefreshTokenRepositoryError;
    use chrono::DateTime;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct KnownHashes {
        hashes: Arc<Mutex<HashSet<String>>>,
    }

    #[async_trait]
    impl RefreshTokenRepository for KnownHashes {
        async fn store(
            &self,
            _user_id: Uuid,
            token_hash: &str,
            _expires_at: DateTime<Utc>,
        ) -> Result<(), RefreshTokenRepositoryError> {
            self.hashes.lock().unwrap().insert(token_hash.to_string());
            Ok(())
        }

        async fn is_active(
            &self,
            token_hash: &str,
            _now: DateTime<Utc>,
        ) -> Result<bool, RefreshTokenRepositoryError> {
            Ok(self.hashes.lock().unwrap().contains(token_hash))
        }
    }

    fn setup() -> (Arc<JwtTokenService>, KnownHashes, RefreshAccessTokenService<KnownHashes>) {
        let jwt = Arc::new(JwtTokenService::new(JwtConfig::for_tests()));
        let repo = KnownHashes::default();
        let service = RefreshAccessTokenService::new(jwt.clone(), repo.clone());
        (jwt, repo, service)
    }

    #[tokio::test]
    async fn persisted_refresh_token_yields_access_token() {
        let (jwt, repo, service) = setup();
        let user_id = Uuid::new_v4();
        let refresh = jwt.generate_refresh_token(user_id, "a@b.com").unwrap();
        repo.store(user_id, &hash_token(&refresh), Utc::now())
            .await
            .unwrap();

        let result = service
            .execute(RefreshAccessTokenCommand::new(refresh).unwrap())
            .await
            .unwrap();

        let claims = jwt.verify_token(&result.access_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, TokenKind::Access);
    }

    #[tokio::test]
    async fn unknown_refresh_token_is_rejected() {
        let (jwt, _repo, service) = setup();
        let refresh = jwt.generate_refresh_token(Uuid::new_v4(), "a@b.com").unwrap();

        let result = service
            .execute(RefreshAccessTokenCommand::new(refresh).unwrap())
            .await;

        assert_eq!(
            result.unwrap_err(),
            RefreshAccessTokenError::InvalidRefreshToken
        );
    }

    #[tokio::test]
    async fn access_token_cannot_refresh() {
        let (jwt, repo, service) = setup();
        let user_id = Uuid::new_v4();
        let access = jwt.generate_access_token(user_id, "a@b.com").unwrap();
        repo.store(user_id, &hash_token(&access), Utc::now())
            .await
            .unwrap();

        let result = service
            .execute(RefreshAccessTokenCommand::new(access).unwrap())
            .await;

        assert_eq!(
            result.unwrap_err(),
            RefreshAccessTokenError::InvalidRefreshToken
        );
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let (_jwt, _repo, service) = setup();
        let result = service
            .execute(RefreshAccessTokenCommand::new("not.a.jwt".into()).unwrap())
            .await;

        assert_eq!(
            result.unwrap_err(),
            RefreshAccessTokenError::InvalidRefreshToken
        );
    }
}
