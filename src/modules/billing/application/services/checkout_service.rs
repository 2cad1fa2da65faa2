use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::modules::billing::application::domain::{NewPaymentOrder, PlanCatalog};
use crate::modules::billing::application::ports::incoming::use_cases::{
    BillingError, CheckoutSession, CreateCheckoutCommand, CreateCheckoutUseCase,
};
use crate::modules::billing::application::ports::outgoing::{
    CreateOrderRequest, CustomerDetails, GatewayError, PaymentGateway, PaymentOrderRepository,
};
use crate::modules::onboarding::application::domain::OnboardingStatus;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;

/// Opens a gateway order for a catalog plan and records it as PENDING.
pub struct CheckoutService<O>
where
    O: PaymentOrderRepository,
{
    orders: O,
    users: Arc<dyn UserRepository>,
    gateway: Option<Arc<dyn PaymentGateway>>,
    catalog: PlanCatalog,
}

impl<O> CheckoutService<O>
where
    O: PaymentOrderRepository,
{
    pub fn new(
        orders: O,
        users: Arc<dyn UserRepository>,
        gateway: Option<Arc<dyn PaymentGateway>>,
        catalog: PlanCatalog,
    ) -> Self {
        Self {
            orders,
            users,
            gateway,
            catalog,
        }
    }
}

#[async_trait]
impl<O> CreateCheckoutUseCase for CheckoutService<O>
where
    O: PaymentOrderRepository,
{
    async fn execute(
        &self,
        command: CreateCheckoutCommand,
    ) -> Result<CheckoutSession, BillingError> {
        let user = self
            .users
            .find_by_id(command.user_id())
            .await?
            .ok_or(BillingError::UserNotFound)?;

        if !matches!(
            user.status,
            OnboardingStatus::Approved | OnboardingStatus::Active
        ) {
            return Err(BillingError::InvalidStatus(format!(
                "User must be approved before subscribing. Current status: {}",
                user.status
            )));
        }

        let plan = self
            .catalog
            .find(command.plan_id())
            .ok_or(BillingError::UnknownPlan)?;
        let gateway = self
            .gateway
            .as_ref()
            .ok_or(BillingError::Gateway(GatewayError::NotConfigured))?;

        let order_id = format!("order_{}", Utc::now().timestamp_millis());
        let created = gateway
            .create_order(CreateOrderRequest {
                order_id: order_id.clone(),
                amount: plan.price,
                currency: plan.currency.to_string(),
                customer: CustomerDetails {
                    customer_id: user.id.to_string(),
                    email: user.email.clone(),
                    name: user.name.clone().unwrap_or_else(|| user.username.clone()),
                    phone: user.phone_number.clone(),
                },
                note: format!("{} plan subscription", plan.name),
            })
            .await?;

        self.orders
            .create(NewPaymentOrder {
                order_id: created.order_id.clone(),
                user_id: user.id,
                plan_id: Some(plan.id.to_string()),
                amount: plan.price,
                currency: plan.currency.to_string(),
                is_subscription: true,
                payment_session_id: Some(created.payment_session_id.clone()),
            })
            .await?;

        info!(user_id = %user.id, order_id = %created.order_id, plan_id = plan.id, "Checkout opened");

        Ok(CheckoutSession {
            order_id: created.order_id,
            payment_session_id: created.payment_session_id,
            checkout_url: created.checkout_url,
        })
    }
}
