use crate::modules::billing::application::ports::outgoing::{
    BillingLedgerError, GatewayError, PaymentOrderRepositoryError, SubscriptionRepositoryError,
};
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;
use crate::modules::onboarding::application::ports::outgoing::UserRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BillingError {
    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    InvalidStatus(String),

    #[error("Invalid plan ID")]
    UnknownPlan,

    #[error("Payment order not found")]
    OrderNotFound,

    #[error("No active subscription found")]
    NoActiveSubscription,

    #[error(transparent)]
    Gateway(GatewayError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<GatewayError> for BillingError {
    fn from(err: GatewayError) -> Self {
        BillingError::Gateway(err)
    }
}

impl From<UserRepositoryError> for BillingError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound => BillingError::UserNotFound,
            other => BillingError::RepositoryError(other.to_string()),
        }
    }
}

impl From<PaymentOrderRepositoryError> for BillingError {
    fn from(err: PaymentOrderRepositoryError) -> Self {
        BillingError::RepositoryError(err.to_string())
    }
}

impl From<SubscriptionRepositoryError> for BillingError {
    fn from(err: SubscriptionRepositoryError) -> Self {
        BillingError::RepositoryError(err.to_string())
    }
}

impl From<BillingLedgerError> for BillingError {
    fn from(err: BillingLedgerError) -> Self {
        match err {
            BillingLedgerError::Transition(TransitionFailure::UserNotFound) => {
                BillingError::UserNotFound
            }
            BillingLedgerError::Transition(TransitionFailure::Guard(guard)) => {
                BillingError::InvalidStatus(guard.to_string())
            }
            BillingLedgerError::Transition(TransitionFailure::RepositoryError(msg))
            | BillingLedgerError::DatabaseError(msg) => BillingError::RepositoryError(msg),
        }
    }
}
