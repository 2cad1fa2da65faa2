use actix_web::HttpResponse;

use crate::modules::identity::application::ports::incoming::use_cases::IdentityVerificationError;
use crate::shared::api::ApiResponse;

pub(super) fn identity_error_response(e: IdentityVerificationError) -> HttpResponse {
    let message = e.to_string();
    match e {
        IdentityVerificationError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", &message),
        IdentityVerificationError::SessionNotFound => {
            ApiResponse::not_found("SESSION_NOT_FOUND", &message)
        }
        IdentityVerificationError::InvalidStatus(_) => {
            ApiResponse::bad_request("INVALID_STATUS", &message)
        }
        IdentityVerificationError::CountryNotSelected => {
            ApiResponse::bad_request("COUNTRY_NOT_SELECTED", &message)
        }
        IdentityVerificationError::MobileNumberRequired
        | IdentityVerificationError::DeclaredDataRequired => {
            ApiResponse::validation(&message)
        }
        IdentityVerificationError::InvalidSession => {
            ApiResponse::bad_request("INVALID_SESSION", &message)
        }
        IdentityVerificationError::NotAuthenticated => {
            ApiResponse::bad_request("NOT_AUTHENTICATED", &message)
        }
        IdentityVerificationError::DataMismatch(_) => {
            ApiResponse::bad_request("DATA_MISMATCH", &message)
        }
        IdentityVerificationError::MissingAccountId => {
            ApiResponse::bad_request("MISSING_ACCOUNT_ID", &message)
        }
        IdentityVerificationError::AccountAlreadyVerified => {
            ApiResponse::conflict("ACCOUNT_ALREADY_VERIFIED", &message)
        }
        IdentityVerificationError::ProviderNotConfigured(_) => {
            ApiResponse::service_unavailable("PROVIDER_NOT_CONFIGURED", &message)
        }
        IdentityVerificationError::Upstream(msg) => {
            tracing::error!("Identity provider call failed: {}", msg);
            ApiResponse::bad_gateway("PROVIDER_ERROR", "Identity provider request failed")
        }
        IdentityVerificationError::RepositoryError(msg) => {
            tracing::error!("Identity verification storage failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
