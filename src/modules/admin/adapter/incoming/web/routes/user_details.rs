use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::admin_error_response;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/users/{id}")]
pub async fn user_details_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return ApiResponse::validation("Invalid user id"),
    };

    match data.admin.user_details.execute(user_id).await {
        Ok(details) => ApiResponse::success(details),
        Err(e) => admin_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::domain::UserDetails;
    use crate::modules::admin::application::ports::incoming::use_cases::{
        AdminError, UserDetailsUseCase,
    };
    use crate::modules::onboarding::application::domain::OnboardingStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::token_provider_for;
    use crate::tests::support::stubs::StubAdminGuard;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct KnownUser(Uuid);

    #[async_trait]
    impl UserDetailsUseCase for KnownUser {
        async fn execute(&self, user_id: Uuid) -> Result<UserDetails, AdminError> {
            if user_id != self.0 {
                return Err(AdminError::UserNotFound);
            }
            Ok(UserDetails {
                id: user_id,
                email: "a@b.com".to_string(),
                username: "alice".to_string(),
                name: None,
                phone_number: None,
                country: Some("India".to_string()),
                status: OnboardingStatus::VideoVerified,
                created_at: Utc::now(),
                verification: None,
                subscription: None,
            })
        }
    }

    async fn call(uri: &str, known: Uuid) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_admin_guard(StubAdminGuard::allowing())
            .with_user_details(KnownUser(known))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(user_details_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_user_details_found() {
        let id = Uuid::new_v4();
        let resp = call(&format!("/api/admin/users/{}", id), id).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "VIDEO_VERIFIED");
    }

    #[actix_web::test]
    async fn test_user_details_unknown_user() {
        let resp = call(&format!("/api/admin/users/{}", Uuid::new_v4()), Uuid::new_v4()).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_user_details_malformed_id() {
        let resp = call("/api/admin/users/not-a-uuid", Uuid::new_v4()).await;
        assert_eq!(resp.status(), 400);
    }
}
