use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::onboarding::application::ports::incoming::use_cases::{
    SelectCountryCommand, SelectCountryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectCountryRequest {
    pub country: String,
}

#[post("/api/onboarding/select-country")]
pub async fn select_country_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<SelectCountryRequest>,
) -> impl Responder {
    let command = match SelectCountryCommand::new(user.user_id, payload.into_inner().country) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.onboarding.select_country.execute(command).await {
        Ok(selection) => ApiResponse::success(selection),
        Err(e) => map_select_country_error(e),
    }
}

fn map_select_country_error(e: SelectCountryError) -> HttpResponse {
    match e {
        SelectCountryError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", &e.to_string())
        }
        SelectCountryError::EmailNotVerified => {
            ApiResponse::bad_request("INVALID_STATUS", &e.to_string())
        }
        SelectCountryError::RepositoryError(msg) => {
            tracing::error!("Select country failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
