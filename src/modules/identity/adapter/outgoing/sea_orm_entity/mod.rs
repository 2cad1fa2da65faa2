pub mod user_verifications;
pub mod verification_sessions;
