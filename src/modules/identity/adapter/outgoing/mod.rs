pub mod digilocker;
pub mod identity_ledger_postgres;
pub mod sea_orm_entity;
pub mod stripe;
pub mod user_verification_repository_postgres;
pub mod verification_session_repository_postgres;

mod http;

pub use digilocker::{DigilockerConfig, DigilockerProvider};
pub use identity_ledger_postgres::IdentityLedgerPostgres;
pub use stripe::{StripeIdentityConfig, StripeIdentityProvider};
pub use user_verification_repository_postgres::UserVerificationRepositoryPostgres;
pub use verification_session_repository_postgres::VerificationSessionRepositoryPostgres;
