pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::admin::adapter::outgoing::AdminQueryPostgres;
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::services::{
    AdminAccessService, ApproveUserService, DashboardStatsService, PendingUsersService,
    RejectUserService, UserDetailsService,
};
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::{
    InMemoryOtpStore, OtpAuditPostgres, RedisOtpStore, RefreshTokenRepositoryPostgres,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::orchestrator::OtpSignInOrchestrator;
use crate::modules::auth::application::ports::outgoing::{OtpStore, TokenProvider};
use crate::modules::auth::application::services::{
    IssueTokensService, RefreshAccessTokenService, SendOtpService, VerifyOtpService,
};
use crate::modules::billing::adapter::outgoing::{
    BillingLedgerPostgres, CashfreeConfig, CashfreeGateway, PaymentOrderRepositoryPostgres,
    SubscriptionRepositoryPostgres,
};
use crate::modules::billing::application::billing_use_cases::BillingUseCases;
use crate::modules::billing::application::domain::PlanCatalog;
use crate::modules::billing::application::ports::outgoing::{BillingLedger, PaymentGateway};
use crate::modules::billing::application::services::{
    CancelSubscriptionService, CheckoutService, CurrentSubscriptionService, ListPlansService,
    PaymentHistoryService, PaymentStatusService, WebhookService,
};
use crate::modules::email::adapter::outgoing::{build_email_sender, EmailConfig};
use crate::modules::email::application::ports::outgoing::OnboardingNotifier;
use crate::modules::email::application::services::OnboardingEmailService;
use crate::modules::identity::adapter::outgoing::{
    DigilockerConfig, DigilockerProvider, IdentityLedgerPostgres, StripeIdentityConfig,
    StripeIdentityProvider, UserVerificationRepositoryPostgres,
    VerificationSessionRepositoryPostgres,
};
use crate::modules::identity::application::identity_use_cases::IdentityUseCases;
use crate::modules::identity::application::ports::outgoing::IdentityLedger;
use crate::modules::identity::application::services::{
    AwaitAuthenticationService, CleanupExpiredSessionsService, CompleteVerificationService,
    IdentityProviderRegistry, IdentityStatusService, InitiateVerificationService,
    SessionStatusService,
};
use crate::modules::onboarding::adapter::outgoing::{
    OnboardingDetailsPostgres, UserRepositoryPostgres,
};
use crate::modules::onboarding::application::domain::CountryRoutes;
use crate::modules::onboarding::application::onboarding_use_cases::OnboardingUseCases;
use crate::modules::onboarding::application::ports::incoming::use_cases::OnboardingStateMachine;
use crate::modules::onboarding::application::ports::outgoing::UserRepository;
use crate::modules::onboarding::application::services::{
    GetOnboardingStatusService, OnboardingStateMachineService, SelectCountryService,
};
use crate::modules::video::adapter::outgoing::VideoSubmissionRepositoryPostgres;
use crate::modules::video::application::services::{SubmitVideoService, VideoStatusService};
use crate::modules::video::application::video_use_cases::VideoUseCases;
use crate::shared::api::json_config::custom_json_config;
use crate::shared::config::{load_env_files, optional, AppConfig};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const APP_NAME: &str = "Onboarding";

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub onboarding: OnboardingUseCases,
    pub identity: IdentityUseCases,
    pub video: VideoUseCases,
    pub admin: AdminUseCases,
    pub billing: BillingUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let environment = load_env_files();
    let config = AppConfig::from_env(environment)?;
    let server_url = format!("{}:{}", config.host, config.port);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to connect to database: {e}")))?;
    let db_arc = Arc::new(conn);

    // Redis connection; `rediss://` URLs need a process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| std::io::Error::other(format!("Failed to create Redis pool: {e}")))?;
    let redis_arc = Arc::new(redis_pool);

    // Outbound mail
    let email_config = EmailConfig::from_env(config.is_production())?;
    let email_sender = build_email_sender(&email_config)?;
    let notifier: Arc<dyn OnboardingNotifier> =
        Arc::new(OnboardingEmailService::new(email_sender, APP_NAME));

    // Tokens
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    // Repositories
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let users: Arc<dyn UserRepository> = Arc::new(user_repo.clone());
    let details_query = OnboardingDetailsPostgres::new(Arc::clone(&db_arc));
    let sessions = VerificationSessionRepositoryPostgres::new(Arc::clone(&db_arc));
    let verifications = UserVerificationRepositoryPostgres::new(Arc::clone(&db_arc));
    let videos = VideoSubmissionRepositoryPostgres::new(Arc::clone(&db_arc));
    let refresh_tokens = RefreshTokenRepositoryPostgres::new(Arc::clone(&db_arc));
    let orders = PaymentOrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let subscriptions = SubscriptionRepositoryPostgres::new(Arc::clone(&db_arc));
    let identity_ledger: Arc<dyn IdentityLedger> =
        Arc::new(IdentityLedgerPostgres::new(Arc::clone(&db_arc)));

    let otp_store: Arc<dyn OtpStore> = if config.otp_store == "memory" {
        if config.is_production() {
            warn!("OTP_STORE=memory in production; codes will not survive restarts");
        }
        Arc::new(InMemoryOtpStore::default())
    } else {
        Arc::new(RedisOtpStore::new(Arc::clone(&redis_arc)))
    };

    let state_machine: Arc<dyn OnboardingStateMachine> =
        Arc::new(OnboardingStateMachineService::new(user_repo.clone()));

    // Auth
    let verify_otp = VerifyOtpService::new(
        user_repo.clone(),
        Arc::clone(&otp_store),
        Arc::new(OtpAuditPostgres::new(Arc::clone(&db_arc))),
    );
    let issue_tokens = IssueTokensService::new(Arc::clone(&token_provider), refresh_tokens.clone());
    let auth = AuthUseCases {
        send_otp: Arc::new(SendOtpService::new(
            user_repo.clone(),
            Arc::clone(&otp_store),
            Arc::clone(&notifier),
        )),
        sign_in: Arc::new(OtpSignInOrchestrator::new(
            Arc::new(verify_otp),
            Arc::new(issue_tokens),
        )),
        refresh_token: Arc::new(RefreshAccessTokenService::new(
            Arc::clone(&token_provider),
            refresh_tokens,
        )),
    };

    // Onboarding
    let routes = CountryRoutes::default();
    let onboarding = OnboardingUseCases {
        select_country: Arc::new(SelectCountryService::new(user_repo.clone(), routes.clone())),
        status: Arc::new(GetOnboardingStatusService::new(
            user_repo.clone(),
            details_query.clone(),
            routes.clone(),
        )),
    };

    // Identity providers register only when their credentials are present
    let mut registry = IdentityProviderRegistry::new(routes);
    match DigilockerConfig::from_env(&config.frontend_url) {
        Some(locker) => registry = registry.register(Arc::new(DigilockerProvider::new(locker))),
        None => warn!("DigiLocker credentials missing; locker verification disabled"),
    }
    match StripeIdentityConfig::from_env() {
        Some(hosted) => {
            registry = registry.register(Arc::new(StripeIdentityProvider::new(hosted)))
        }
        None => warn!("STRIPE_SECRET_KEY missing; hosted verification disabled"),
    }

    let identity = IdentityUseCases {
        initiate: Arc::new(InitiateVerificationService::new(
            sessions.clone(),
            verifications.clone(),
            Arc::clone(&users),
            registry.clone(),
        )),
        callback: Arc::new(AwaitAuthenticationService::new(
            sessions.clone(),
            registry.clone(),
        )),
        session_status: Arc::new(SessionStatusService::new(sessions.clone(), registry.clone())),
        complete: Arc::new(CompleteVerificationService::new(
            sessions.clone(),
            verifications.clone(),
            Arc::clone(&users),
            Arc::clone(&identity_ledger),
            registry,
        )),
        status: Arc::new(IdentityStatusService::new(verifications)),
        cleanup: Arc::new(CleanupExpiredSessionsService::new(sessions)),
    };

    // Video
    let video = VideoUseCases {
        submit: Arc::new(SubmitVideoService::new(
            videos.clone(),
            Arc::clone(&users),
            Arc::clone(&state_machine),
            Arc::clone(&notifier),
        )),
        status: Arc::new(VideoStatusService::new(videos)),
    };

    // Admin
    let catalog = PlanCatalog::standard();
    let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));
    let admin = AdminUseCases {
        access_guard: Arc::new(AdminAccessService::new(Arc::clone(&users))),
        pending_users: Arc::new(PendingUsersService::new(admin_query.clone())),
        user_details: Arc::new(UserDetailsService::new(
            Arc::clone(&users),
            Arc::new(details_query),
        )),
        approve: Arc::new(ApproveUserService::new(
            Arc::clone(&state_machine),
            Arc::clone(&notifier),
        )),
        reject: Arc::new(RejectUserService::new(
            identity_ledger,
            Arc::clone(&users),
            Arc::clone(&notifier),
        )),
        dashboard: Arc::new(DashboardStatsService::new(admin_query, catalog.clone())),
    };

    // Billing
    let gateway: Option<Arc<dyn PaymentGateway>> =
        match CashfreeConfig::from_env(&config.frontend_url) {
            Some(cashfree) => Some(Arc::new(CashfreeGateway::new(cashfree))),
            None => {
                warn!("Cashfree credentials missing; checkout disabled");
                None
            }
        };
    let webhook_secret = optional("CASHFREE_WEBHOOK_SECRET", "");
    if webhook_secret.is_empty() {
        warn!("CASHFREE_WEBHOOK_SECRET missing; every webhook will be rejected");
    }
    let ledger: Arc<dyn BillingLedger> =
        Arc::new(BillingLedgerPostgres::new(Arc::clone(&db_arc), catalog.clone()));

    let billing = BillingUseCases {
        plans: Arc::new(ListPlansService::new(catalog.clone())),
        checkout: Arc::new(CheckoutService::new(
            orders.clone(),
            Arc::clone(&users),
            gateway.clone(),
            catalog,
        )),
        current: Arc::new(CurrentSubscriptionService::new(subscriptions)),
        cancel: Arc::new(CancelSubscriptionService::new(
            Arc::clone(&ledger),
            Arc::clone(&users),
            Arc::clone(&notifier),
        )),
        payment_status: Arc::new(PaymentStatusService::new(orders.clone(), gateway)),
        history: Arc::new(PaymentHistoryService::new(orders)),
        webhook: Arc::new(WebhookService::new(
            webhook_secret,
            ledger,
            Arc::clone(&users),
            Arc::clone(&notifier),
        )),
    };

    let state = AppState {
        auth,
        onboarding,
        identity,
        video,
        admin,
        billing,
    };

    info!(environment = %config.environment, "Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::admin::adapter::incoming::web::routes as admin;
    use crate::modules::auth::adapter::incoming::web::routes as auth;
    use crate::modules::billing::adapter::incoming::web::routes as billing;
    use crate::modules::identity::adapter::incoming::web::routes as identity;
    use crate::modules::onboarding::adapter::incoming::web::routes as onboarding;
    use crate::modules::video::adapter::incoming::web::routes as video;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::send_otp_handler);
    cfg.service(auth::verify_otp_handler);
    cfg.service(auth::refresh_token_handler);
    // Onboarding
    cfg.service(onboarding::select_country_handler);
    cfg.service(onboarding::onboarding_status_handler);
    // Identity
    cfg.service(identity::initiate_verification_handler);
    cfg.service(identity::verification_callback_handler);
    cfg.service(identity::session_status_handler);
    cfg.service(identity::complete_verification_handler);
    cfg.service(identity::identity_status_handler);
    cfg.service(identity::cleanup_expired_sessions_handler);
    // Video
    cfg.service(video::submit_video_handler);
    cfg.service(video::video_status_handler);
    // Admin: `pending` must resolve before `{id}`
    cfg.service(admin::pending_users_handler);
    cfg.service(admin::dashboard_stats_handler);
    cfg.service(admin::user_details_handler);
    cfg.service(admin::approve_user_handler);
    cfg.service(admin::reject_user_handler);
    // Billing
    cfg.service(billing::list_plans_handler);
    cfg.service(billing::checkout_handler);
    cfg.service(billing::current_subscription_handler);
    cfg.service(billing::cancel_subscription_handler);
    cfg.service(billing::payment_status_handler);
    cfg.service(billing::payment_history_handler);
    cfg.service(billing::payment_webhook_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
