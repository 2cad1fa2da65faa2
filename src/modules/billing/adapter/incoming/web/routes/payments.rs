use actix_web::{get, web, Responder};

use super::billing_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/payment/status/{order_id}")]
pub async fn payment_status_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();
    match data
        .billing
        .payment_status
        .execute(user.user_id, &order_id)
        .await
    {
        Ok(status) => ApiResponse::success(status),
        Err(e) => billing_error_response(e),
    }
}

#[get("/api/payment/history")]
pub async fn payment_history_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.billing.history.execute(user.user_id).await {
        Ok(orders) => ApiResponse::success(orders),
        Err(e) => billing_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::billing::application::domain::{PaymentOrder, PaymentOrderStatus};
    use crate::modules::billing::application::ports::incoming::use_cases::{
        BillingError, PaymentHistoryUseCase, PaymentStatusUseCase,
    };
    use crate::modules::billing::application::ports::outgoing::GatewayOrderStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::token_provider_for;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockStatus {
        result: Result<GatewayOrderStatus, BillingError>,
    }

    #[async_trait]
    impl PaymentStatusUseCase for MockStatus {
        async fn execute(
            &self,
            _user_id: Uuid,
            _order_id: &str,
        ) -> Result<GatewayOrderStatus, BillingError> {
            self.result.clone()
        }
    }

    struct MockHistory;

    #[async_trait]
    impl PaymentHistoryUseCase for MockHistory {
        async fn execute(&self, user_id: Uuid) -> Result<Vec<PaymentOrder>, BillingError> {
            Ok(vec![PaymentOrder {
                order_id: "order_2".to_string(),
                user_id,
                plan_id: Some("price_individual_pro".to_string()),
                amount: 9.99,
                currency: "USD".to_string(),
                status: PaymentOrderStatus::Success,
                is_subscription: true,
                payment_session_id: Some("secret-session".to_string()),
                created_at: Utc::now(),
            }])
        }
    }

    #[actix_web::test]
    async fn test_payment_status_found() {
        let state = TestAppStateBuilder::default()
            .with_payment_status(MockStatus {
                result: Ok(GatewayOrderStatus {
                    order_id: "order_1".to_string(),
                    status: "PAID".to_string(),
                    amount: Some(9.99),
                    currency: Some("USD".to_string()),
                }),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(payment_status_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/payment/status/order_1")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["orderId"], "order_1");
        assert_eq!(body["data"]["status"], "PAID");
    }

    #[actix_web::test]
    async fn test_payment_status_not_found() {
        let state = TestAppStateBuilder::default()
            .with_payment_status(MockStatus {
                result: Err(BillingError::OrderNotFound),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(payment_status_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/payment/status/order_x")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Payment order not found");
    }

    #[actix_web::test]
    async fn test_history_hides_session_ids() {
        let state = TestAppStateBuilder::default()
            .with_payment_history(MockHistory)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(payment_history_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/payment/history")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["status"], "SUCCESS");
        assert!(body["data"][0].get("paymentSessionId").is_none());
    }

    #[actix_web::test]
    async fn test_history_requires_token() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(payment_history_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/payment/history")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
