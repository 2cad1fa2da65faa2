use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/subscription/plans")]
pub async fn list_plans_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.billing.plans.execute())
}
