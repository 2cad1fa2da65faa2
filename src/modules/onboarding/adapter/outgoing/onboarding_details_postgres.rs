use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::billing::adapter::outgoing::sea_orm_entity::subscriptions::{
    Column as SubscriptionColumn, Entity as SubscriptionEntity,
};
use crate::modules::identity::adapter::outgoing::sea_orm_entity::user_verifications::{
    Column as VerificationColumn, Entity as VerificationEntity,
};
use crate::modules::onboarding::application::ports::outgoing::{
    OnboardingDetailsQuery, OnboardingDetailsQueryError, SubscriptionSummary, VerificationSummary,
};

#[derive(Clone, Debug)]
pub struct OnboardingDetailsPostgres {
    db: Arc<DatabaseConnection>,
}

impl OnboardingDetailsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OnboardingDetailsQuery for OnboardingDetailsPostgres {
    async fn verification_summary(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VerificationSummary>, OnboardingDetailsQueryError> {
        let row = VerificationEntity::find()
            .filter(VerificationColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| OnboardingDetailsQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|v| VerificationSummary {
            method: v.method,
            status: v.status,
            verified_at: v.verified_at.map(Into::into),
        }))
    }

    async fn subscription_summary(
        &self,
        user_id: Uuid,
    ) -> Result<Option<SubscriptionSummary>, OnboardingDetailsQueryError> {
        let row = SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| OnboardingDetailsQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|s| SubscriptionSummary {
            plan_name: s.plan_name,
            status: s.status,
            end_date: s.end_date.into(),
        }))
    }
}
