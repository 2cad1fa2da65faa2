use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::billing::application::domain::Subscription;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub plan_id: String,
    pub plan_type: String,
    pub plan_name: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub status: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub auto_renew: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Result<Subscription, String> {
        Ok(Subscription {
            subscription_id: self.id,
            user_id: self.user_id,
            plan_id: self.plan_id.clone(),
            plan_type: self.plan_type.parse()?,
            plan_name: self.plan_name.clone(),
            gateway_order_id: self.gateway_order_id.clone(),
            gateway_payment_id: self.gateway_payment_id.clone(),
            status: self.status.parse()?,
            start_date: self.start_date.into(),
            end_date: self.end_date.into(),
            auto_renew: self.auto_renew,
        })
    }
}
