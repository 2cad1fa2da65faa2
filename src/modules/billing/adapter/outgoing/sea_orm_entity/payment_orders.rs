use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::billing::application::domain::PaymentOrder;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_id: String,
    pub user_id: Uuid,
    pub plan_id: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub is_subscription: bool,
    pub payment_session_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Result<PaymentOrder, String> {
        Ok(PaymentOrder {
            order_id: self.order_id.clone(),
            user_id: self.user_id,
            plan_id: self.plan_id.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
            status: self.status.parse()?,
            is_subscription: self.is_subscription,
            payment_session_id: self.payment_session_id.clone(),
            created_at: self.created_at.into(),
        })
    }
}
