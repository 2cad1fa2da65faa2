use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::error_response::identity_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::identity::application::ports::incoming::use_cases::CompleteVerificationCommand;
use crate::modules::reconciliation::application::domain::IdentityFields;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Identity details as typed by the user. Extra keys are accepted and ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProvidedData {
    pub name_as_per_aadhaar: String,
    pub date_of_birth: String,
    pub gender: String,
    pub state: String,
    pub pincode: String,
}

impl From<UserProvidedData> for IdentityFields {
    fn from(data: UserProvidedData) -> Self {
        IdentityFields {
            name: data.name_as_per_aadhaar,
            dob: data.date_of_birth,
            gender: data.gender,
            state: data.state,
            pincode: data.pincode,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteVerificationRequest {
    pub verification_id: String,
    #[serde(default)]
    pub user_provided_data: Option<UserProvidedData>,
}

#[post("/api/identity/complete")]
pub async fn complete_verification_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CompleteVerificationRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let command = match CompleteVerificationCommand::new(
        user.user_id,
        request.verification_id,
        request.user_provided_data.map(IdentityFields::from),
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.identity.complete.execute(command).await {
        Ok(completion) => ApiResponse::success(completion),
        Err(e) => identity_error_response(e),
    }
}
