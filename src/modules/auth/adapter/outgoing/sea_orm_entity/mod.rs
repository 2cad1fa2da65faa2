pub mod otp_verifications;
pub mod refresh_tokens;
