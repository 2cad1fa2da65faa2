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
                    .table(VerificationSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerificationSessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VerificationSessions::VerificationId)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(VerificationSessions::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(VerificationSessions::Method)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationSessions::MobileNumber)
                            .string_len(20)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(VerificationSessions::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationSessions::FlowType)
                            .string_len(10)
                            .null(),
                    )
                    .col(ColumnDef::new(VerificationSessions::ConsentUrl).text().null())
                    .col(
                        ColumnDef::new(VerificationSessions::ProviderAccountId)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(VerificationSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VerificationSessions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_verification_sessions_user")
                            .from(VerificationSessions::Table, VerificationSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Cleanup sweep scans by age
        manager
            .create_index(
                Index::create()
                    .name("idx_verification_sessions_created_at")
                    .table(VerificationSessions::Table)
                    .col(VerificationSessions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VerificationSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VerificationSessions {
    Table,
    Id,
    VerificationId,
    UserId,
    Method,
    MobileNumber,
    Status,
    FlowType,
    ConsentUrl,
    ProviderAccountId,
    CreatedAt,
    UpdatedAt,
}
