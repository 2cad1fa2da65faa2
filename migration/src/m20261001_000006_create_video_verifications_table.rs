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
                    .table(VideoVerifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VideoVerifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VideoVerifications::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(VideoVerifications::PhotoUrl).text().not_null())
                    .col(ColumnDef::new(VideoVerifications::VideoUrl).text().not_null())
                    .col(
                        ColumnDef::new(VideoVerifications::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoVerifications::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_verifications_user")
                            .from(VideoVerifications::Table, VideoVerifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoVerifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VideoVerifications {
    Table,
    Id,
    UserId,
    PhotoUrl,
    VideoUrl,
    Status,
    SubmittedAt,
}
