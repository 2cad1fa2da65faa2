use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::billing::application::domain::Subscription;
use crate::modules::billing::application::ports::incoming::use_cases::{
    BillingError, CancelSubscriptionUseCase, CancellationReceipt, CurrentSubscriptionUseCase,
};
use crate::modules::billing::application::ports::outgoing::{
    BillingLedger, CancellationOutcome, SubscriptionRepository,
};
use crate::modules::email::application::ports::outgoing::OnboardingNotifier;
use crate::modules::email::application::services::spawn_notification;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

pub struct CurrentSubscriptionService<S>
where
    S: SubscriptionRepository,
{
    subscriptions: S,
}

impl<S> CurrentSubscriptionService<S>
where
    S: SubscriptionRepository,
{
    pub fn new(subscriptions: S) -> Self {
        Self { subscriptions }
    }
}

#[async_trait]
impl<S> CurrentSubscriptionUseCase for CurrentSubscriptionService<S>
where
    S: SubscriptionRepository,
{
    async fn execute(&self, user_id: Uuid) -> Result<Option<Subscription>, BillingError> {
        Ok(self
            .subscriptions
            .find_by_user(user_id)
            .await?
            .filter(Subscription::is_active))
    }
}

pub struct CancelSubscriptionService {
    ledger: Arc<dyn BillingLedger>,
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn OnboardingNotifier>,
}

impl CancelSubscriptionService {
    pub fn new(
        ledger: Arc<dyn BillingLedger>,
        users: Arc<dyn UserRepository>,
        notifier: Arc<dyn OnboardingNotifier>,
    ) -> Self {
        Self {
            ledger,
            users,
            notifier,
        }
    }
}

#[async_trait]
impl CancelSubscriptionUseCase for CancelSubscriptionService {
    async fn execute(&self, user_id: Uuid) -> Result<CancellationReceipt, BillingError> {
        let subscription = match self.ledger.cancel_subscription(user_id).await? {
            CancellationOutcome::NoActiveSubscription => {
                return Err(BillingError::NoActiveSubscription)
            }
            CancellationOutcome::Cancelled(subscription) => subscription,
        };

        info!(user_id = %user_id, plan = %subscription.plan_name, "Subscription cancelled");

        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => {
                let notifier = Arc::clone(&self.notifier);
                let plan_name = subscription.plan_name.clone();
                spawn_notification("subscription_cancelled", async move {
                    notifier
                        .subscription_cancelled(&user.email, &user.username, &plan_name)
                        .await
                });
            }
            Ok(None) => {}
            Err(e) => warn!(user_id = %user_id, "Cancellation mail skipped: {}", e),
        }

        Ok(CancellationReceipt {
            message: "Subscription cancelled successfully".to_string(),
        })
    }
}
