pub mod otp_sign_in;

pub use otp_sign_in::OtpSignInOrchestrator;
