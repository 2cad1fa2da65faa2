use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::admin::application::ports::outgoing::AdminAccessError;
use crate::modules::auth::application::ports::outgoing::{TokenError, TokenKind, TokenProvider};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller identified by a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let jwt_service = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    match jwt_service.verify_token_of(&token, TokenKind::Access) {
        Ok(claims) => Ok(AuthenticatedUser {
            user_id: claims.sub,
            email: claims.email,
        }),
        Err(TokenError::InvalidTokenType(_)) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        ))),
        Err(_) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))),
    }
}

/// Authenticated caller whose stored role is ADMIN.
///
/// The role is read from the user store on every request rather than from
/// token claims, so a demoted admin loses access immediately.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticated = authenticate(req);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let user = authenticated?;
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            match state.admin.access_guard.require_admin(user.user_id).await {
                Ok(()) => Ok(AdminUser {
                    user_id: user.user_id,
                }),
                Err(AdminAccessError::NotAdmin) => Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "You do not have admin access",
                ))),
                Err(AdminAccessError::UserNotFound) => Err(create_api_error(
                    ApiResponse::unauthorized("INVALID_TOKEN", "User no longer exists"),
                )),
                Err(AdminAccessError::RepositoryError(msg)) => {
                    tracing::error!("Admin role lookup failed: {}", msg);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{refresh_token_provider_for, token_provider_for};
    use crate::tests::support::stubs::StubAdminGuard;
    use actix_web::{get, test, App, Responder};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        ApiResponse::success(user.user_id)
    }

    #[get("/admin-only")]
    async fn admin_only(admin: AdminUser) -> impl Responder {
        ApiResponse::success(admin.user_id)
    }

    #[actix_web::test]
    async fn accepts_access_token() {
        let user_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(token_provider_for(user_id))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], user_id.to_string());
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn refresh_token_cannot_authenticate() {
        let app = test::init_service(
            App::new()
                .app_data(refresh_token_provider_for(Uuid::new_v4()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn unknown_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer forged"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn non_admin_is_forbidden() {
        let state = TestAppStateBuilder::default()
            .with_admin_guard(StubAdminGuard::denying())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(admin_only),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn admin_is_let_through() {
        let state = TestAppStateBuilder::default()
            .with_admin_guard(StubAdminGuard::allowing())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_for(Uuid::new_v4()))
                .service(admin_only),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
