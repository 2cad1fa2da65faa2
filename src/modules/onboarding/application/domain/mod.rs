pub mod country;
pub mod entities;
pub mod transitions;

pub use country::{CountryRoutes, VerificationMethod};
pub use entities::{OnboardingStatus, Role, UserAccount};
pub use transitions::{Transition, TransitionError};
