use sea_orm_migration::prelude::*;

use super::m20261001_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentOrders::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PaymentOrders::OrderId)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PaymentOrders::UserId).uuid().not_null())
                    .col(ColumnDef::new(PaymentOrders::PlanId).string_len(64).null())
                    .col(ColumnDef::new(PaymentOrders::Amount).double().not_null())
                    .col(
                        ColumnDef::new(PaymentOrders::Currency)
                            .string_len(3)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentOrders::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(PaymentOrders::IsSubscription)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PaymentOrders::PaymentSessionId)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PaymentOrders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PaymentOrders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_orders_user")
                            .from(PaymentOrders::Table, PaymentOrders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PaymentRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // One record per order; a replayed success webhook cannot add a second
                    .col(
                        ColumnDef::new(PaymentRecords::OrderId)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PaymentRecords::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PaymentRecords::GatewayPaymentId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentRecords::Amount).double().not_null())
                    .col(
                        ColumnDef::new(PaymentRecords::Currency)
                            .string_len(3)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentRecords::Method).string_len(32).null())
                    .col(
                        ColumnDef::new(PaymentRecords::PaidAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_records_order")
                            .from(PaymentRecords::Table, PaymentRecords::OrderId)
                            .to(PaymentOrders::Table, PaymentOrders::OrderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_records_user")
                            .from(PaymentRecords::Table, PaymentRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_orders_user_created_at")
                    .table(PaymentOrders::Table)
                    .col(PaymentOrders::UserId)
                    .col(PaymentOrders::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PaymentOrders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PaymentOrders {
    Table,
    Id,
    OrderId,
    UserId,
    PlanId,
    Amount,
    Currency,
    Status,
    IsSubscription,
    PaymentSessionId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PaymentRecords {
    Table,
    Id,
    OrderId,
    UserId,
    GatewayPaymentId,
    Amount,
    Currency,
    Method,
    PaidAt,
}
