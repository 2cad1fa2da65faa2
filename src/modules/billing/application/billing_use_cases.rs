use std::sync::Arc;

use super::ports::incoming::use_cases::{
    CancelSubscriptionUseCase, CreateCheckoutUseCase, CurrentSubscriptionUseCase,
    ListPlansUseCase, PaymentHistoryUseCase, PaymentStatusUseCase, ProcessWebhookUseCase,
};

#[derive(Clone)]
pub struct BillingUseCases {
    pub plans: Arc<dyn ListPlansUseCase>,
    pub checkout: Arc<dyn CreateCheckoutUseCase>,
    pub current: Arc<dyn CurrentSubscriptionUseCase>,
    pub cancel: Arc<dyn CancelSubscriptionUseCase>,
    pub payment_status: Arc<dyn PaymentStatusUseCase>,
    pub history: Arc<dyn PaymentHistoryUseCase>,
    pub webhook: Arc<dyn ProcessWebhookUseCase>,
}
