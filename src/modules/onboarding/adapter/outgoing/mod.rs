pub mod onboarding_details_postgres;
pub mod sea_orm_entity;
pub mod user_repository_postgres;
pub mod user_status_writer;

pub use onboarding_details_postgres::OnboardingDetailsPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
