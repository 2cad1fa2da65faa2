use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::subscriptions::{
    Column as SubscriptionColumn, Entity as SubscriptionEntity,
};
use crate::modules::billing::application::domain::Subscription;
use crate::modules::billing::application::ports::outgoing::{
    SubscriptionRepository, SubscriptionRepositoryError,
};

#[derive(Clone, Debug)]
pub struct SubscriptionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriptionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, SubscriptionRepositoryError> {
        SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| SubscriptionRepositoryError::DatabaseError(e.to_string()))?
            .map(|m| m.to_domain().map_err(SubscriptionRepositoryError::DatabaseError))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::billing::adapter::outgoing::sea_orm_entity::subscriptions::Model;
    use crate::modules::billing::application::domain::{PlanType, SubscriptionStatus};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn maps_stored_subscription() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![Model {
                id: Uuid::new_v4(),
                user_id,
                plan_id: "price_company_startup".to_string(),
                plan_type: "COMPANY".to_string(),
                plan_name: "Startup".to_string(),
                gateway_order_id: Some("order_1".to_string()),
                gateway_payment_id: Some("pay_1".to_string()),
                status: "CANCELLED".to_string(),
                start_date: Utc::now().into(),
                end_date: Utc::now().into(),
                auto_renew: false,
                created_at: Utc::now().into(),
                updated_at: Utc::now().into(),
            }]])
            .into_connection();
        let repo = SubscriptionRepositoryPostgres::new(Arc::new(db));

        let sub = repo.find_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(sub.plan_type, PlanType::Company);
        assert_eq!(sub.status, SubscriptionStatus::Cancelled);
        assert!(!sub.is_active());
    }

    #[tokio::test]
    async fn absent_subscription_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = SubscriptionRepositoryPostgres::new(Arc::new(db));

        assert!(repo.find_by_user(Uuid::new_v4()).await.unwrap().is_none());
    }
}
