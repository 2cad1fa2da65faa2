use actix_web::{get, post, web, Responder};
use serde::Serialize;

use super::billing_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::billing::application::domain::Subscription;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
#[serde(untagged)]
enum CurrentSubscription {
    Active(Subscription),
    Missing { message: &'static str },
}

#[get("/api/subscription/current")]
pub async fn current_subscription_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.billing.current.execute(user.user_id).await {
        Ok(Some(subscription)) => ApiResponse::success(CurrentSubscription::Active(subscription)),
        Ok(None) => ApiResponse::success(CurrentSubscription::Missing {
            message: "No active subscription",
        }),
        Err(e) => billing_error_response(e),
    }
}

#[post("/api/subscription/cancel")]
pub async fn cancel_subscription_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.billing.cancel.execute(user.user_id).await {
        Ok(receipt) => ApiResponse::success(receipt),
        Err(e) => billing_error_response(e),
    }
}
