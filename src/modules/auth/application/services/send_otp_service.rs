use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::{generate_otp_code, OtpRecord};
use crate::modules::auth::application::ports::incoming::use_cases::{
    OtpDispatch, SendOtpCommand, SendOtpError, SendOtpUseCase,
};
use crate::modules::auth::application::ports::outgoing::OtpStore;
use crate::modules::email::application::ports::outgoing::OnboardingNotifier;
use crate::modules::onboarding::application::domain::{OnboardingStatus, UserAccount};
use crate::modules::onboarding::application::ports::outgoing::{
    NewUser, UserRepository, UserRepositoryError,
};

const SENT: &str = "OTP sent successfully";
const SENT_CONSOLE_FALLBACK: &str = "OTP sent (console fallback)";

#[derive(Clone)]
pub struct SendOtpService<R>
where
    R: UserRepository + Send + Sync,
{
    users: R,
    store: Arc<dyn OtpStore>,
    notifier: Arc<dyn OnboardingNotifier>,
}

impl<R> SendOtpService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(users: R, store: Arc<dyn OtpStore>, notifier: Arc<dyn OnboardingNotifier>) -> Self {
        Self {
            users,
            store,
            notifier,
        }
    }

    async fn register(&self, email: &str, username: &str) -> Result<UserAccount, SendOtpError> {
        if self.users.find_by_email(email).await.map_err(repo_err)?.is_some() {
            return Err(SendOtpError::UserAlreadyExists);
        }
        if self.users.username_exists(username).await.map_err(repo_err)? {
            return Err(SendOtpError::UsernameTaken);
        }

        let user = self
            .users
            .create(NewUser {
                email: email.to_string(),
                username: username.to_string(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailTaken => SendOtpError::UserAlreadyExists,
                UserRepositoryError::UsernameTaken => SendOtpError::UsernameTaken,
                other => repo_err(other),
            })?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, email: &str) -> Result<UserAccount, SendOtpError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(repo_err)?
            .ok_or(SendOtpError::UserNotFound)?;

        if user.status == OnboardingStatus::Registered {
            return Err(SendOtpError::EmailNotVerified);
        }
        Ok(user)
    }
}

fn repo_err(e: UserRepositoryError) -> SendOtpError {
    SendOtpError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> SendOtpUseCase for SendOtpService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: SendOtpCommand) -> Result<OtpDispatch, SendOtpError> {
        let purpose = command.purpose();
        let email = command.email();

        let user = match command.username() {
            Some(username) => self.register(email, username).await?,
            None => self.login(email).await?,
        };

        let code = generate_otp_code();
        let record = OtpRecord::issue(
            code.clone(),
            purpose,
            command.username().map(str::to_string),
            Utc::now(),
        );
        self.store
            .put(email, record)
            .await
            .map_err(|e| SendOtpError::StoreUnavailable(e.to_string()))?;

        let message = match self.notifier.send_otp(email, &code, purpose).await {
            Ok(()) => SENT,
            Err(e) => {
                warn!(
                    user_id = %user.id,
                    purpose = purpose.as_str(),
                    "OTP email not delivered ({}); console fallback code for {}: {}",
                    e,
                    email,
                    code
                );
                SENT_CONSOLE_FALLBACK
            }
        };

        Ok(OtpDispatch {
            user_id: user.id,
            purpose,
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::InMemoryOtpStore;
    use crate::modules::auth::application::domain::{OtpPurpose, OtpRedemption};
    use crate::tests::support::fakes::{InMemoryUsers, RecordingNotifier, SentNotification};

    fn service(
        users: &InMemoryUsers,
        store: &Arc<InMemoryOtpStore>,
        notifier: &RecordingNotifier,
    ) -> SendOtpService<InMemoryUsers> {
        SendOtpService::new(users.clone(), store.clone(), Arc::new(notifier.clone()))
    }

    fn sent_code(notifier: &RecordingNotifier) -> String {
        match notifier.sent().last() {
            Some(SentNotification::Otp { code, .. }) => code.clone(),
            other => panic!("expected an OTP mail, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn registration_creates_user_and_stores_code() {
        let users = InMemoryUsers::default();
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::default();
        let service = service(&users, &store, &notifier);

        let cmd = SendOtpCommand::new("a@b.com".into(), Some("alice".into())).unwrap();
        let dispatch = service.execute(cmd).await.unwrap();

        assert_eq!(dispatch.purpose, OtpPurpose::Register);
        assert_eq!(dispatch.message, "OTP sent successfully");
        assert_eq!(
            users.status_of(dispatch.user_id),
            Some(OnboardingStatus::Registered)
        );

        let code = sent_code(&notifier);
        let redeemed = store.redeem("a@b.com", &code, Utc::now()).await.unwrap();
        match redeemed {
            OtpRedemption::Redeemed(record) => {
                assert_eq!(record.purpose, OtpPurpose::Register);
                assert_eq!(record.username.as_deref(), Some("alice"));
            }
            other => panic!("expected redeemed record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn registration_conflicts_on_existing_email() {
        let users = InMemoryUsers::default();
        users.seed("a@b.com", "someone", OnboardingStatus::EmailVerified);
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::default();

        let cmd = SendOtpCommand::new("a@b.com".into(), Some("alice".into())).unwrap();
        let result = service(&users, &store, &notifier).execute(cmd).await;

        assert_eq!(result.unwrap_err(), SendOtpError::UserAlreadyExists);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn registration_conflicts_on_taken_username() {
        let users = InMemoryUsers::default();
        users.seed("other@b.com", "alice", OnboardingStatus::EmailVerified);
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::default();

        let cmd = SendOtpCommand::new("a@b.com".into(), Some("alice".into())).unwrap();
        let result = service(&users, &store, &notifier).execute(cmd).await;

        assert_eq!(result.unwrap_err(), SendOtpError::UsernameTaken);
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn login_requires_existing_user() {
        let users = InMemoryUsers::default();
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::default();

        let cmd = SendOtpCommand::new("ghost@b.com".into(), None).unwrap();
        let result = service(&users, &store, &notifier).execute(cmd).await;

        assert_eq!(result.unwrap_err(), SendOtpError::UserNotFound);
    }

    #[tokio::test]
    async fn login_requires_verified_email() {
        let users = InMemoryUsers::default();
        users.seed("a@b.com", "alice", OnboardingStatus::Registered);
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::default();

        let cmd = SendOtpCommand::new("a@b.com".into(), None).unwrap();
        let result = service(&users, &store, &notifier).execute(cmd).await;

        assert_eq!(result.unwrap_err(), SendOtpError::EmailNotVerified);
    }

    #[tokio::test]
    async fn login_sends_login_code() {
        let users = InMemoryUsers::default();
        let user = users.seed("a@b.com", "alice", OnboardingStatus::IdVerified);
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::default();

        let cmd = SendOtpCommand::new("A@B.COM".into(), None).unwrap();
        let dispatch = service(&users, &store, &notifier).execute(cmd).await.unwrap();

        assert_eq!(dispatch.user_id, user.id);
        assert_eq!(dispatch.purpose, OtpPurpose::Login);
        assert!(matches!(
            notifier.sent().last(),
            Some(SentNotification::Otp { purpose: OtpPurpose::Login, .. })
        ));
    }

    #[tokio::test]
    async fn mail_failure_still_succeeds_with_fallback_message() {
        let users = InMemoryUsers::default();
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::failing();

        let cmd = SendOtpCommand::new("a@b.com".into(), Some("alice".into())).unwrap();
        let dispatch = service(&users, &store, &notifier).execute(cmd).await.unwrap();

        assert_eq!(dispatch.message, "OTP sent (console fallback)");
    }

    #[tokio::test]
    async fn newer_code_replaces_older_one() {
        let users = InMemoryUsers::default();
        users.seed("a@b.com", "alice", OnboardingStatus::EmailVerified);
        let store = Arc::new(InMemoryOtpStore::default());
        let notifier = RecordingNotifier::default();
        let service = service(&users, &store, &notifier);

        service
            .execute(SendOtpCommand::new("a@b.com".into(), None).unwrap())
            .await
            .unwrap();
        let first = sent_code(&notifier);

        loop {
            service
                .execute(SendOtpCommand::new("a@b.com".into(), None).unwrap())
                .await
                .unwrap();
            if sent_code(&notifier) != first {
                break;
            }
        }

        let result = store.redeem("a@b.com", &first, Utc::now()).await.unwrap();
        assert!(matches!(result, OtpRedemption::Mismatch { attempts: 1 }));
    }
}
