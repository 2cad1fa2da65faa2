use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    pub method: String,
    pub status: String,
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub plan_name: String,
    pub status: String,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OnboardingDetailsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OnboardingDetailsQuery: Send + Sync {
    async fn verification_summary(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationSummary>, OnboardingDetailsQueryError>;

    async fn subscription_summary(
        &self,
        user_id: Uuid,
    ) -> Result<Option<SubscriptionSummary>, OnboardingDetailsQueryError>;
}
