pub mod onboarding_details_query;
pub mod user_repository;

pub use onboarding_details_query::{
    OnboardingDetailsQuery, OnboardingDetailsQueryError, SubscriptionSummary, VerificationSummary,
};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError};
