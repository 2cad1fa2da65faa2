use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::application::ports::incoming::use_cases::{
    IdentityStatus, IdentityStatusUseCase, IdentityVerificationError,
};
use crate::modules::identity::application::ports::outgoing::UserVerificationRepository;

pub struct IdentityStatusService<V>
where
    V: UserVerificationRepository,
{
    verifications: V,
}

impl<V> IdentityStatusService<V>
where
    V: UserVerificationRepository,
{
    pub fn new(verifications: V) -> Self {
        Self { verifications }
    }
}

#[async_trait]
impl<V> IdentityStatusUseCase for IdentityStatusService<V>
where
    V: UserVerificationRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<IdentityStatus, IdentityVerificationError> {
        let record = self.verifications.find_by_user(user_id).await?;

        Ok(match record {
            Some(v) => IdentityStatus {
                verified: v.is_verified(),
                method: Some(v.method),
                status: Some(v.status),
            },
            None => IdentityStatus {
                verified: false,
                method: None,
                status: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::identity::application::domain::{IdentityVerification, VerificationStatus};
    use crate::modules::onboarding::application::domain::VerificationMethod;
    use crate::tests::support::fakes::InMemoryVerifications;

    #[tokio::test]
    async fn unverified_user_has_no_method() {
        let service = IdentityStatusService::new(InMemoryVerifications::default());

        let status = service.execute(Uuid::new_v4()).await.unwrap();

        assert!(!status.verified);
        assert_eq!(status.method, None);
    }

    #[tokio::test]
    async fn rejected_record_is_not_verified() {
        let verifications = InMemoryVerifications::default();
        let user_id = Uuid::new_v4();
        verifications.insert(IdentityVerification {
            user_id,
            method: VerificationMethod::StripeIdentity,
            status: VerificationStatus::Rejected,
            provider_account_id: None,
            verified_data: None,
            rejection_reason: Some("canceled".to_string()),
            verified_at: None,
        });
        let service = IdentityStatusService::new(verifications);

        let status = service.execute(user_id).await.unwrap();

        assert!(!status.verified);
        assert_eq!(status.method, Some(VerificationMethod::StripeIdentity));
        assert_eq!(status.status, Some(VerificationStatus::Rejected));
    }
}
