use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::billing::application::domain::{
    verify_webhook_signature, PaymentOutcome, PaymentReceipt, WebhookEvent,
};
use crate::modules::billing::application::ports::incoming::use_cases::{
    BillingError, ProcessWebhookUseCase, WebhookAck, WebhookDelivery,
};
use crate::modules::billing::application::ports::outgoing::{
    BillingLedger, BillingLedgerError, FailureSettlement, SuccessSettlement,
};
use crate::modules::email::application::ports::outgoing::OnboardingNotifier;
use crate::modules::email::application::services::spawn_notification;
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

/// Logs an event that was acknowledged without changing anything.
fn dead_letter(order_id: &str, reason: &str, event_type: &str) -> WebhookAck {
    warn!(
        target: "billing::dead_letter",
        order_id,
        reason,
        event_type,
        "Webhook event not applied"
    );
    WebhookAck::skipped(reason)
}

/// Applies signed payment notifications from the gateway.
pub struct WebhookService {
    secret: String,
    ledger: Arc<dyn BillingLedger>,
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn OnboardingNotifier>,
}

impl WebhookService {
    pub fn new(
        secret: String,
        ledger: Arc<dyn BillingLedger>,
        users: Arc<dyn UserRepository>,
        notifier: Arc<dyn OnboardingNotifier>,
    ) -> Self {
        Self {
            secret,
            ledger,
            users,
            notifier,
        }
    }

    /// Guard refusals are logic errors and are acknowledged; storage errors surface.
    fn ledger_failure(
        &self,
        event: &WebhookEvent,
        err: BillingLedgerError,
    ) -> Result<WebhookAck, BillingError> {
        match err {
            BillingLedgerError::Transition(TransitionFailure::Guard(guard)) => {
                warn!(order_id = %event.order_id, "{}", guard);
                Ok(dead_letter(&event.order_id, "transition_refused", &event.event_type))
            }
            BillingLedgerError::Transition(TransitionFailure::UserNotFound) => {
                Ok(dead_letter(&event.order_id, "unknown_user", &event.event_type))
            }
            other => Err(other.into()),
        }
    }

    async fn apply_success(&self, event: &WebhookEvent) -> Result<WebhookAck, BillingError> {
        let receipt = PaymentReceipt {
            order_id: event.order_id.clone(),
            gateway_payment_id: event.payment_id.clone().unwrap_or_default(),
            amount: event.payment_amount.or(event.order_amount).unwrap_or_default(),
            currency: event.order_currency.clone().unwrap_or_default(),
            method: event.payment_method.clone(),
        };
        let (amount, currency) = (receipt.amount, receipt.currency.clone());

        let settlement = match self.ledger.settle_success(receipt).await {
            Ok(settlement) => settlement,
            Err(e) => return self.ledger_failure(event, e),
        };

        match settlement {
            SuccessSettlement::UnknownOrder => {
                Ok(dead_letter(&event.order_id, "unknown_order", &event.event_type))
            }
            SuccessSettlement::UnknownPlan => {
                Ok(dead_letter(&event.order_id, "unknown_plan", &event.event_type))
            }
            SuccessSettlement::AlreadySettled => {
                Ok(dead_letter(&event.order_id, "already_settled", &event.event_type))
            }
            SuccessSettlement::Settled {
                user_id,
                subscription,
            } => {
                info!(order_id = %event.order_id, user_id = %user_id, "Payment confirmed");

                if let Some(subscription) = subscription {
                    match self.users.find_by_id(user_id).await {
                        Ok(Some(user)) => {
                            let notifier = Arc::clone(&self.notifier);
                            spawn_notification("payment_completed", async move {
                                notifier
                                    .payment_completed(
                                        &user.email,
                                        &user.username,
                                        &subscription.plan_name,
                                        amount,
                                        &currency,
                                    )
                                    .await
                            });
                        }
                        Ok(None) => {}
                        Err(e) => warn!(user_id = %user_id, "Payment mail skipped: {}", e),
                    }
                }

                Ok(WebhookAck::processed())
            }
        }
    }

    async fn apply_failure(&self, event: &WebhookEvent) -> Result<WebhookAck, BillingError> {
        let settlement = match self.ledger.settle_failure(&event.order_id).await {
            Ok(settlement) => settlement,
            Err(e) => return self.ledger_failure(event, e),
        };

        match settlement {
            FailureSettlement::UnknownOrder => {
                Ok(dead_letter(&event.order_id, "unknown_order", &event.event_type))
            }
            FailureSettlement::NotPending => {
                Ok(dead_letter(&event.order_id, "not_pending", &event.event_type))
            }
            FailureSettlement::MarkedFailed => {
                info!(order_id = %event.order_id, "Payment failed");
                Ok(WebhookAck::processed())
            }
            FailureSettlement::SubscriptionCancelled { user_id } => {
                info!(order_id = %event.order_id, user_id = %user_id, "Renewal failed, subscription cancelled");
                Ok(WebhookAck::processed())
            }
        }
    }
}

#[async_trait]
impl ProcessWebhookUseCase for WebhookService {
    async fn execute(&self, delivery: WebhookDelivery) -> Result<WebhookAck, BillingError> {
        let authentic = match (&delivery.signature, &delivery.timestamp) {
            (Some(signature), Some(timestamp)) => {
                verify_webhook_signature(&self.secret, timestamp, &delivery.body, signature)
            }
            _ => false,
        };
        if !authentic {
            warn!("Webhook rejected: invalid signature");
            return Ok(WebhookAck::rejected("invalid_signature"));
        }

        let event = match WebhookEvent::parse(&delivery.body) {
            Ok(event) => event,
            Err(e) => {
                warn!("{}", e);
                return Ok(dead_letter("", "unparseable_payload", ""));
            }
        };

        match &event.outcome {
            PaymentOutcome::Success => self.apply_success(&event).await,
            PaymentOutcome::Failed => self.apply_failure(&event).await,
            PaymentOutcome::Other(status) => {
                info!(order_id = %event.order_id, status = %status, "Ignoring payment status");
                Ok(dead_letter(&event.order_id, "unhandled_status", &event.event_type))
            }
        }
    }
}
