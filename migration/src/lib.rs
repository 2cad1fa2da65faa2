pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users_table;
mod m20261001_000002_create_refresh_tokens_table;
mod m20261001_000003_create_otp_verifications_table;
mod m20261001_000004_create_user_verifications_table;
mod m20261001_000005_create_verification_sessions_table;
mod m20261001_000006_create_video_verifications_table;
mod m20261001_000007_create_subscriptions_table;
mod m20261001_000008_create_payment_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users_table::Migration),
            Box::new(m20261001_000002_create_refresh_tokens_table::Migration),
            Box::new(m20261001_000003_create_otp_verifications_table::Migration),
            Box::new(m20261001_000004_create_user_verifications_table::Migration),
            Box::new(m20261001_000005_create_verification_sessions_table::Migration),
            Box::new(m20261001_000006_create_video_verifications_table::Migration),
            Box::new(m20261001_000007_create_subscriptions_table::Migration),
            Box::new(m20261001_000008_create_payment_tables::Migration),
        ]
    }
}
