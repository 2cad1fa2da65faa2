use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::{OnboardingStatus, UserAccount};
use crate::modules::onboarding::application::ports::outgoing::{
    SubscriptionSummary, VerificationSummary,
};

/// A user waiting in the approval queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub username: String,
    pub country: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub verification: Option<VerificationSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub status: OnboardingStatus,
    pub created_at: DateTime<Utc>,
    pub verification: Option<VerificationSummary>,
    pub subscription: Option<SubscriptionSummary>,
}

impl UserDetails {
    pub fn new(
        user: UserAccount,
        verification: Option<VerificationSummary>,
        subscription: Option<SubscriptionSummary>,
    ) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            name: user.name,
            phone_number: user.phone_number,
            country: user.country,
            status: user.status,
            created_at: user.created_at,
            verification,
            subscription,
        }
    }
}

/// Result of an approve or reject call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    pub user_id: Uuid,
    pub status: OnboardingStatus,
    pub message: String,
}
