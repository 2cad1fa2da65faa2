use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::billing_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::billing::application::ports::incoming::use_cases::CreateCheckoutCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub plan_id: Option<String>,
}

#[post("/api/subscription/checkout")]
pub async fn checkout_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CheckoutRequest>,
) -> impl Responder {
    let command = match CreateCheckoutCommand::new(user.user_id, payload.into_inner().plan_id) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.billing.checkout.execute(command).await {
        Ok(session) => ApiResponse::created(session),
        Err(e) => billing_error_response(e),
    }
}
