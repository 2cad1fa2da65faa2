mod refresh_token;
mod send_otp;
mod verify_otp;

pub use refresh_token::refresh_token_handler;
pub use send_otp::send_otp_handler;
pub use verify_otp::verify_otp_handler;
