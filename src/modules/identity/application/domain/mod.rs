pub mod session;
pub mod verification;

pub use session::{
    generate_verification_id, FlowType, NewVerificationSession, SessionStatus,
    VerificationSession, SESSION_TTL_HOURS,
};
pub use verification::{IdentityVerification, VerificationStatus};
