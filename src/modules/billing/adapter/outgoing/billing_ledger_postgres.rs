use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
    Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::sea_orm_entity::payment_orders::{
    Column as OrderColumn, Entity as OrderEntity, Model as OrderModel,
};
use super::sea_orm_entity::payment_records::{
    ActiveModel as RecordActiveModel, Entity as RecordEntity,
};
use super::sea_orm_entity::subscriptions::{
    ActiveModel as SubscriptionActiveModel, Column as SubscriptionColumn,
    Entity as SubscriptionEntity,
};
use crate::modules::billing::application::domain::{
    PaymentOrderStatus, PaymentReceipt, Plan, PlanCatalog, Subscription, SubscriptionStatus,
};
use crate::modules::billing::application::ports::outgoing::{
    BillingLedger, BillingLedgerError, CancellationOutcome, FailureSettlement, SuccessSettlement,
};
use crate::modules::onboarding::adapter::outgoing::user_status_writer::apply_transition;
use crate::modules::onboarding::application::domain::Transition;
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;

#[derive(Clone, Debug)]
pub struct BillingLedgerPostgres {
    db: Arc<DatabaseConnection>,
    catalog: PlanCatalog,
}

impl BillingLedgerPostgres {
    pub fn new(db: Arc<DatabaseConnection>, catalog: PlanCatalog) -> Self {
        Self { db, catalog }
    }
}

fn db_error(e: DbErr) -> BillingLedgerError {
    BillingLedgerError::DatabaseError(e.to_string())
}

async fn locked_order<C: ConnectionTrait>(
    conn: &C,
    order_id: &str,
) -> Result<Option<OrderModel>, BillingLedgerError> {
    OrderEntity::find()
        .filter(OrderColumn::OrderId.eq(order_id))
        .lock_exclusive()
        .one(conn)
        .await
        .map_err(db_error)
}

async fn set_order_status<C: ConnectionTrait>(
    conn: &C,
    order_id: &str,
    status: PaymentOrderStatus,
) -> Result<(), BillingLedgerError> {
    OrderEntity::update_many()
        .col_expr(OrderColumn::Status, Expr::value(status.as_str()))
        .col_expr(OrderColumn::UpdatedAt, Expr::current_timestamp().into())
        .filter(OrderColumn::OrderId.eq(order_id))
        .exec(conn)
        .await
        .map_err(db_error)?;
    Ok(())
}

/// Applies `transition` unless the user already sits at its target status.
async fn move_user<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    transition: Transition,
) -> Result<(), BillingLedgerError> {
    match apply_transition(conn, user_id, transition).await {
        Ok(_) => Ok(()),
        Err(TransitionFailure::Guard(e)) if e.actual == transition.to_status() => Ok(()),
        Err(e) => Err(BillingLedgerError::Transition(e)),
    }
}

async fn upsert_subscription<C: ConnectionTrait>(
    conn: &C,
    order: &OrderModel,
    plan: &Plan,
    gateway_payment_id: &str,
) -> Result<Subscription, BillingLedgerError> {
    let start = Utc::now();
    let end = plan.cycle.period_end(start);
    let existing = SubscriptionEntity::find()
        .filter(SubscriptionColumn::UserId.eq(order.user_id))
        .one(conn)
        .await
        .map_err(db_error)?;

    let subscription_id = match existing {
        Some(row) => {
            SubscriptionEntity::update_many()
                .col_expr(SubscriptionColumn::PlanId, Expr::value(plan.id))
                .col_expr(SubscriptionColumn::PlanType, Expr::value(plan.plan_type.as_str()))
                .col_expr(SubscriptionColumn::PlanName, Expr::value(plan.name))
                .col_expr(
                    SubscriptionColumn::GatewayOrderId,
                    Expr::value(order.order_id.clone()),
                )
                .col_expr(
                    SubscriptionColumn::GatewayPaymentId,
                    Expr::value(gateway_payment_id.to_string()),
                )
                .col_expr(
                    SubscriptionColumn::Status,
                    Expr::value(SubscriptionStatus::Active.as_str()),
                )
                .col_expr(SubscriptionColumn::StartDate, Expr::value(start))
                .col_expr(SubscriptionColumn::EndDate, Expr::value(end))
                .col_expr(SubscriptionColumn::AutoRenew, Expr::value(true))
                .col_expr(SubscriptionColumn::UpdatedAt, Expr::current_timestamp().into())
                .filter(SubscriptionColumn::Id.eq(row.id))
                .exec(conn)
                .await
                .map_err(db_error)?;
            row.id
        }
        None => {
            let id = Uuid::new_v4();
            SubscriptionEntity::insert(SubscriptionActiveModel {
                id: Set(id),
                user_id: Set(order.user_id),
                plan_id: Set(plan.id.to_string()),
                plan_type: Set(plan.plan_type.as_str().to_string()),
                plan_name: Set(plan.name.to_string()),
                gateway_order_id: Set(Some(order.order_id.clone())),
                gateway_payment_id: Set(Some(gateway_payment_id.to_string())),
                status: Set(SubscriptionStatus::Active.as_str().to_string()),
                start_date: Set(start.into()),
                end_date: Set(end.into()),
                auto_renew: Set(true),
                created_at: Set(start.into()),
                updated_at: Set(start.into()),
            })
            .exec_without_returning(conn)
            .await
            .map_err(db_error)?;
            id
        }
    };

    Ok(Subscription {
        subscription_id,
        user_id: order.user_id,
        plan_id: plan.id.to_string(),
        plan_type: plan.plan_type,
        plan_name: plan.name.to_string(),
        gateway_order_id: Some(order.order_id.clone()),
        gateway_payment_id: Some(gateway_payment_id.to_string()),
        status: SubscriptionStatus::Active,
        start_date: start,
        end_date: end,
        auto_renew: true,
    })
}

async fn cancel_row<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<(), BillingLedgerError> {
    SubscriptionEntity::update_many()
        .col_expr(
            SubscriptionColumn::Status,
            Expr::value(SubscriptionStatus::Cancelled.as_str()),
        )
        .col_expr(SubscriptionColumn::AutoRenew, Expr::value(false))
        .col_expr(SubscriptionColumn::UpdatedAt, Expr::current_timestamp().into())
        .filter(SubscriptionColumn::Id.eq(id))
        .exec(conn)
        .await
        .map_err(db_error)?;
    Ok(())
}

#[async_trait]
impl BillingLedger for BillingLedgerPostgres {
    async fn settle_success(
        &self,
        receipt: PaymentReceipt,
    ) -> Result<SuccessSettlement, BillingLedgerError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let Some(order) = locked_order(&txn, &receipt.order_id).await? else {
            return Ok(SuccessSettlement::UnknownOrder);
        };
        if order.status == PaymentOrderStatus::Success.as_str() {
            return Ok(SuccessSettlement::AlreadySettled);
        }

        let plan = match (&order.plan_id, order.is_subscription) {
            (Some(plan_id), true) => match self.catalog.find(plan_id) {
                Some(plan) => Some(plan),
                None => return Ok(SuccessSettlement::UnknownPlan),
            },
            _ => None,
        };

        set_order_status(&txn, &order.order_id, PaymentOrderStatus::Success).await?;

        RecordEntity::insert(RecordActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.order_id.clone()),
            user_id: Set(order.user_id),
            gateway_payment_id: Set(receipt.gateway_payment_id.clone()),
            amount: Set(receipt.amount),
            currency: Set(receipt.currency.clone()),
            method: Set(receipt.method.clone()),
            paid_at: Set(Utc::now().into()),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(db_error)?;

        let subscription = match plan {
            Some(plan) => {
                let subscription =
                    upsert_subscription(&txn, &order, plan, &receipt.gateway_payment_id).await?;
                move_user(&txn, order.user_id, Transition::Activate).await?;
                Some(subscription)
            }
            None => None,
        };

        txn.commit().await.map_err(db_error)?;
        info!(order_id = %order.order_id, user_id = %order.user_id, "Payment settled");

        Ok(SuccessSettlement::Settled {
            user_id: order.user_id,
            subscription,
        })
    }

    async fn settle_failure(&self, order_id: &str) -> Result<FailureSettlement, BillingLedgerError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let Some(order) = locked_order(&txn, order_id).await? else {
            return Ok(FailureSettlement::UnknownOrder);
        };

        if order.status == PaymentOrderStatus::Pending.as_str() {
            set_order_status(&txn, order_id, PaymentOrderStatus::Failed).await?;
            txn.commit().await.map_err(db_error)?;
            return Ok(FailureSettlement::MarkedFailed);
        }

        let backing = SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(order.user_id))
            .filter(SubscriptionColumn::Status.eq(SubscriptionStatus::Active.as_str()))
            .filter(SubscriptionColumn::GatewayOrderId.eq(order_id))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_error)?;
        let Some(subscription) = backing else {
            return Ok(FailureSettlement::NotPending);
        };

        cancel_row(&txn, subscription.id).await?;
        move_user(&txn, order.user_id, Transition::Cancel).await?;
        txn.commit().await.map_err(db_error)?;
        info!(order_id, user_id = %order.user_id, "Subscription cancelled after failed charge");

        Ok(FailureSettlement::SubscriptionCancelled {
            user_id: order.user_id,
        })
    }

    async fn cancel_subscription(
        &self,
        user_id: Uuid,
    ) -> Result<CancellationOutcome, BillingLedgerError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let active = SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(user_id))
            .filter(SubscriptionColumn::Status.eq(SubscriptionStatus::Active.as_str()))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_error)?;
        let Some(row) = active else {
            return Ok(CancellationOutcome::NoActiveSubscription);
        };

        cancel_row(&txn, row.id).await?;
        move_user(&txn, user_id, Transition::Cancel).await?;
        txn.commit().await.map_err(db_error)?;

        let mut subscription = row
            .to_domain()
            .map_err(BillingLedgerError::DatabaseError)?;
        subscription.status = SubscriptionStatus::Cancelled;
        subscription.auto_renew = false;

        Ok(CancellationOutcome::Cancelled(subscription))
    }
}
