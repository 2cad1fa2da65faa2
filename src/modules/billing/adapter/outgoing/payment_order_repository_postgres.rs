use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::payment_orders::{
    ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as OrderEntity,
};
use crate::modules::billing::application::domain::{
    NewPaymentOrder, PaymentOrder, PaymentOrderStatus,
};
use crate::modules::billing::application::ports::outgoing::{
    PaymentOrderRepository, PaymentOrderRepositoryError,
};

#[derive(Clone, Debug)]
pub struct PaymentOrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaymentOrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: impl ToString) -> PaymentOrderRepositoryError {
    PaymentOrderRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PaymentOrderRepository for PaymentOrderRepositoryPostgres {
    async fn create(
        &self,
        order: NewPaymentOrder,
    ) -> Result<PaymentOrder, PaymentOrderRepositoryError> {
        let now = Utc::now();
        OrderActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.order_id),
            user_id: Set(order.user_id),
            plan_id: Set(order.plan_id),
            amount: Set(order.amount),
            currency: Set(order.currency),
            status: Set(PaymentOrderStatus::Pending.as_str().to_string()),
            is_subscription: Set(order.is_subscription),
            payment_session_id: Set(order.payment_session_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?
        .to_domain()
        .map_err(db_error)
    }

    async fn find_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<PaymentOrder>, PaymentOrderRepositoryError> {
        OrderEntity::find()
            .filter(OrderColumn::OrderId.eq(order_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain().map_err(db_error))
            .transpose()
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PaymentOrder>, PaymentOrderRepositoryError> {
        OrderEntity::find()
            .filter(OrderColumn::UserId.eq(user_id))
            .order_by_desc(OrderColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .iter()
            .map(|m| m.to_domain().map_err(db_error))
            .collect()
    }
}
