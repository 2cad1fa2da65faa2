use super::entities::OnboardingStatus;

/// Every legal status change. Nothing else may write a user's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    VerifyEmail,
    VerifyIdentity,
    VerifyVideo,
    Approve,
    Reject,
    Activate,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot {action} with status {actual}. Must be {required}.")]
pub struct TransitionError {
    pub action: &'static str,
    pub required: OnboardingStatus,
    pub actual: OnboardingStatus,
}

impl Transition {
    pub fn from_status(&self) -> OnboardingStatus {
        match self {
            Transition::VerifyEmail => OnboardingStatus::Registered,
            Transition::VerifyIdentity => OnboardingStatus::EmailVerified,
            Transition::VerifyVideo => OnboardingStatus::IdVerified,
            Transition::Approve | Transition::Reject => OnboardingStatus::VideoVerified,
            Transition::Activate => OnboardingStatus::Approved,
            Transition::Cancel => OnboardingStatus::Active,
        }
    }

    pub fn to_status(&self) -> OnboardingStatus {
        match self {
            Transition::VerifyEmail => OnboardingStatus::EmailVerified,
            Transition::VerifyIdentity => OnboardingStatus::IdVerified,
            Transition::VerifyVideo => OnboardingStatus::VideoVerified,
            Transition::Approve => OnboardingStatus::Approved,
            Transition::Reject => OnboardingStatus::Registered,
            Transition::Activate => OnboardingStatus::Active,
            Transition::Cancel => OnboardingStatus::Approved,
        }
    }

    fn action(&self) -> &'static str {
        match self {
            Transition::VerifyEmail => "verify email of user",
            Transition::VerifyIdentity => "complete identity verification for user",
            Transition::VerifyVideo => "accept video for user",
            Transition::Approve => "approve user",
            Transition::Reject => "reject user",
            Transition::Activate => "activate user",
            Transition::Cancel => "cancel subscription of user",
        }
    }

    /// Checks the guard against `current` and yields the target status.
    pub fn apply(&self, current: OnboardingStatus) -> Result<OnboardingStatus, TransitionError> {
        if current != self.from_status() {
            return Err(TransitionError {
                action: self.action(),
                required: self.from_status(),
                actual: current,
            });
        }
        Ok(self.to_status())
    }
}
