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
                    .table(UserVerifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserVerifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::Method)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::ProviderAccountId)
                            .string_len(255)
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::VerifiedData)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::RejectionReason)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::VerifiedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserVerifications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_verifications_user")
                            .from(UserVerifications::Table, UserVerifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_user_verifications_updated_at
                BEFORE UPDATE ON user_verifications
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserVerifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserVerifications {
    Table,
    Id,
    UserId,
    Method,
    Status,
    ProviderAccountId,
    VerifiedData,
    RejectionReason,
    VerifiedAt,
    CreatedAt,
    UpdatedAt,
}
