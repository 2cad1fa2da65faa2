pub mod otp;

pub use otp::{
    generate_otp_code, normalize_email, OtpCheck, OtpPurpose, OtpRecord, OtpRedemption,
    MAX_OTP_ATTEMPTS, OTP_TTL_MINUTES,
};
