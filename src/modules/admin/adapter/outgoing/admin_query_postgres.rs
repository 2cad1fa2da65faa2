use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::admin::application::domain::{PendingUser, StatusCounts};
use crate::modules::admin::application::ports::outgoing::{AdminQuery, AdminQueryError};
use crate::modules::billing::adapter::outgoing::sea_orm_entity::subscriptions::{
    Column as SubscriptionColumn, Entity as SubscriptionEntity,
};
use crate::modules::identity::adapter::outgoing::sea_orm_entity::user_verifications::{
    Column as VerificationColumn, Entity as VerificationEntity,
};
use crate::modules::identity::application::domain::VerificationStatus;
use crate::modules::onboarding::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::modules::onboarding::application::domain::OnboardingStatus;
use crate::modules::onboarding::application::ports::outgoing::VerificationSummary;

#[derive(Clone, Debug)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> AdminQueryError {
    AdminQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn pending_users(&self) -> Result<Vec<PendingUser>, AdminQueryError> {
        let users = UserEntity::find()
            .filter(UserColumn::Status.eq(OnboardingStatus::VideoVerified.as_str()))
            .order_by_asc(UserColumn::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        if users.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<_> = users.iter().map(|u| u.id).collect();
        let mut verifications: HashMap<_, _> = VerificationEntity::find()
            .filter(VerificationColumn::UserId.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|v| {
                (
                    v.user_id,
                    VerificationSummary {
                        method: v.method,
                        status: v.status,
                        verified_at: v.verified_at.map(Into::into),
                    },
                )
            })
            .collect();

        Ok(users
            .into_iter()
            .map(|u| PendingUser {
                verification: verifications.remove(&u.id),
                id: u.id,
                name: u.name,
                email: u.email,
                username: u.username,
                country: u.country,
                submitted_at: u.updated_at.into(),
            })
            .collect())
    }

    async fn status_counts(&self) -> Result<StatusCounts, AdminQueryError> {
        let rows: Vec<(String, i64)> = UserEntity::find()
            .select_only()
            .column(UserColumn::Status)
            .column_as(Expr::col(UserColumn::Id).count(), "count")
            .group_by(UserColumn::Status)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        let mut counts = HashMap::new();
        for (status, count) in rows {
            match status.parse::<OnboardingStatus>() {
                Ok(status) => {
                    counts.insert(status, count.max(0) as u64);
                }
                Err(e) => tracing::warn!("Skipping unknown status in counts: {}", e),
            }
        }

        Ok(StatusCounts::new(counts))
    }

    async fn rejected_verification_count(&self) -> Result<u64, AdminQueryError> {
        VerificationEntity::find()
            .filter(VerificationColumn::Status.eq(VerificationStatus::Rejected.as_str()))
            .count(&*self.db)
            .await
            .map_err(db_error)
    }

    async fn active_subscription_plans(&self) -> Result<Vec<String>, AdminQueryError> {
        SubscriptionEntity::find()
            .select_only()
            .column(SubscriptionColumn::PlanName)
            .filter(SubscriptionColumn::Status.eq("ACTIVE"))
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(db_error)
    }
}
