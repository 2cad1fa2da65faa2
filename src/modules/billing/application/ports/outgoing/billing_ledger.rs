use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::billing::application::domain::{PaymentReceipt, Subscription};
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;

#[derive(Debug, Clone, PartialEq)]
pub enum SuccessSettlement {
    UnknownOrder,
    /// The order names a plan missing from the catalog; nothing was written.
    UnknownPlan,
    /// The order was already SUCCESS; nothing was written.
    AlreadySettled,
    Settled {
        user_id: Uuid,
        subscription: Option<Subscription>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FailureSettlement {
    UnknownOrder,
    /// The order had already left PENDING and does not back an active subscription.
    NotPending,
    MarkedFailed,
    /// The failed charge was the renewal of an active subscription, which is now cancelled.
    SubscriptionCancelled { user_id: Uuid },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CancellationOutcome {
    NoActiveSubscription,
    Cancelled(Subscription),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BillingLedgerError {
    #[error("{0}")]
    Transition(TransitionFailure),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Multi-row billing writes. Each call commits all of its rows or none of them.
#[async_trait]
pub trait BillingLedger: Send + Sync {
    /// Marks the order paid, records the payment and, for subscription orders,
    /// upserts the subscription and activates the user.
    async fn settle_success(
        &self,
        receipt: PaymentReceipt,
    ) -> Result<SuccessSettlement, BillingLedgerError>;

    async fn settle_failure(&self, order_id: &str) -> Result<FailureSettlement, BillingLedgerError>;

    /// Cancels the user's ACTIVE subscription and returns the user to APPROVED.
    async fn cancel_subscription(
        &self,
        user_id: Uuid,
    ) -> Result<CancellationOutcome, BillingLedgerError>;
}
