pub mod jwt;
pub mod otp_audit_postgres;
pub mod otp_store_memory;
pub mod otp_store_redis;
pub mod refresh_token_repository_postgres;
pub mod sea_orm_entity;

pub use otp_audit_postgres::OtpAuditPostgres;
pub use otp_store_memory::InMemoryOtpStore;
pub use otp_store_redis::RedisOtpStore;
pub use refresh_token_repository_postgres::RefreshTokenRepositoryPostgres;
