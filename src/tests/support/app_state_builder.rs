use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::ports::incoming::use_cases::{
    ApproveUserUseCase, DashboardStatsUseCase, ListPendingUsersUseCase, RejectUserUseCase,
    UserDetailsUseCase,
};
use crate::modules::admin::application::ports::outgoing::AdminAccessGuard;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RefreshAccessTokenUseCase, SendOtpUseCase, SignInWithOtpUseCase,
};
use crate::modules::billing::application::billing_use_cases::BillingUseCases;
use crate::modules::billing::application::domain::PlanCatalog;
use crate::modules::billing::application::ports::incoming::use_cases::{
    CancelSubscriptionUseCase, CreateCheckoutUseCase, CurrentSubscriptionUseCase,
    PaymentHistoryUseCase, PaymentStatusUseCase, ProcessWebhookUseCase,
};
use crate::modules::billing::application::services::ListPlansService;
use crate::modules::identity::application::identity_use_cases::IdentityUseCases;
use crate::modules::identity::application::ports::incoming::use_cases::{
    AwaitAuthenticationUseCase, CleanupExpiredSessionsUseCase, CompleteVerificationUseCase,
    IdentityStatusUseCase, InitiateVerificationUseCase, SessionStatusUseCase,
};
use crate::modules::onboarding::application::onboarding_use_cases::OnboardingUseCases;
use crate::modules::onboarding::application::ports::incoming::use_cases::{
    GetOnboardingStatusUseCase, SelectCountryUseCase,
};
use crate::modules::video::application::ports::incoming::use_cases::{
    SubmitVideoUseCase, VideoStatusUseCase,
};
use crate::modules::video::application::video_use_cases::VideoUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    onboarding: OnboardingUseCases,
    identity: IdentityUseCases,
    video: VideoUseCases,
    admin: AdminUseCases,
    billing: BillingUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                send_otp: Arc::new(StubSendOtpUseCase),
                sign_in: Arc::new(StubSignInUseCase),
                refresh_token: Arc::new(StubRefreshTokenUseCase),
            },
            onboarding: OnboardingUseCases {
                select_country: Arc::new(StubSelectCountryUseCase),
                status: Arc::new(StubOnboardingStatusUseCase),
            },
            identity: IdentityUseCases {
                initiate: Arc::new(StubIdentityUseCase),
                callback: Arc::new(StubIdentityUseCase),
                session_status: Arc::new(StubIdentityUseCase),
                complete: Arc::new(StubIdentityUseCase),
                status: Arc::new(StubIdentityUseCase),
                cleanup: Arc::new(StubIdentityUseCase),
            },
            video: VideoUseCases {
                submit: Arc::new(StubVideoUseCase),
                status: Arc::new(StubVideoUseCase),
            },
            admin: AdminUseCases {
                access_guard: Arc::new(StubAdminGuard::denying()),
                pending_users: Arc::new(StubAdminUseCase),
                user_details: Arc::new(StubAdminUseCase),
                approve: Arc::new(StubAdminUseCase),
                reject: Arc::new(StubAdminUseCase),
                dashboard: Arc::new(StubAdminUseCase),
            },
            billing: BillingUseCases {
                plans: Arc::new(ListPlansService::new(PlanCatalog::standard())),
                checkout: Arc::new(StubBillingUseCase),
                current: Arc::new(StubBillingUseCase),
                cancel: Arc::new(StubBillingUseCase),
                payment_status: Arc::new(StubBillingUseCase),
                history: Arc::new(StubBillingUseCase),
                webhook: Arc::new(StubBillingUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_send_otp(mut self, uc: impl SendOtpUseCase + 'static) -> Self {
        self.auth.send_otp = Arc::new(uc);
        self
    }

    pub fn with_sign_in(mut self, uc: impl SignInWithOtpUseCase + 'static) -> Self {
        self.auth.sign_in = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl RefreshAccessTokenUseCase + 'static) -> Self {
        self.auth.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_select_country(mut self, uc: impl SelectCountryUseCase + 'static) -> Self {
        self.onboarding.select_country = Arc::new(uc);
        self
    }

    pub fn with_onboarding_status(
        mut self,
        uc: impl GetOnboardingStatusUseCase + 'static,
    ) -> Self {
        self.onboarding.status = Arc::new(uc);
        self
    }

    pub fn with_initiate_verification(
        mut self,
        uc: impl InitiateVerificationUseCase + 'static,
    ) -> Self {
        self.identity.initiate = Arc::new(uc);
        self
    }

    pub fn with_verification_callback(
        mut self,
        uc: impl AwaitAuthenticationUseCase + 'static,
    ) -> Self {
        self.identity.callback = Arc::new(uc);
        self
    }

    pub fn with_session_status(mut self, uc: impl SessionStatusUseCase + 'static) -> Self {
        self.identity.session_status = Arc::new(uc);
        self
    }

    pub fn with_complete_verification(
        mut self,
        uc: impl CompleteVerificationUseCase + 'static,
    ) -> Self {
        self.identity.complete = Arc::new(uc);
        self
    }

    pub fn with_identity_status(mut self, uc: impl IdentityStatusUseCase + 'static) -> Self {
        self.identity.status = Arc::new(uc);
        self
    }

    pub fn with_cleanup_sessions(
        mut self,
        uc: impl CleanupExpiredSessionsUseCase + 'static,
    ) -> Self {
        self.identity.cleanup = Arc::new(uc);
        self
    }

    pub fn with_submit_video(mut self, uc: impl SubmitVideoUseCase + 'static) -> Self {
        self.video.submit = Arc::new(uc);
        self
    }

    pub fn with_video_status(mut self, uc: impl VideoStatusUseCase + 'static) -> Self {
        self.video.status = Arc::new(uc);
        self
    }

    pub fn with_admin_guard(mut self, guard: impl AdminAccessGuard + 'static) -> Self {
        self.admin.access_guard = Arc::new(guard);
        self
    }

    pub fn with_pending_users(mut self, uc: impl ListPendingUsersUseCase + 'static) -> Self {
        self.admin.pending_users = Arc::new(uc);
        self
    }

    pub fn with_user_details(mut self, uc: impl UserDetailsUseCase + 'static) -> Self {
        self.admin.user_details = Arc::new(uc);
        self
    }

    pub fn with_approve_user(mut self, uc: impl ApproveUserUseCase + 'static) -> Self {
        self.admin.approve = Arc::new(uc);
        self
    }

    pub fn with_reject_user(mut self, uc: impl RejectUserUseCase + 'static) -> Self {
        self.admin.reject = Arc::new(uc);
        self
    }

    pub fn with_dashboard_stats(mut self, uc: impl DashboardStatsUseCase + 'static) -> Self {
        self.admin.dashboard = Arc::new(uc);
        self
    }

    pub fn with_checkout(mut self, uc: impl CreateCheckoutUseCase + 'static) -> Self {
        self.billing.checkout = Arc::new(uc);
        self
    }

    pub fn with_current_subscription(
        mut self,
        uc: impl CurrentSubscriptionUseCase + 'static,
    ) -> Self {
        self.billing.current = Arc::new(uc);
        self
    }

    pub fn with_cancel_subscription(
        mut self,
        uc: impl CancelSubscriptionUseCase + 'static,
    ) -> Self {
        self.billing.cancel = Arc::new(uc);
        self
    }

    pub fn with_payment_status(mut self, uc: impl PaymentStatusUseCase + 'static) -> Self {
        self.billing.payment_status = Arc::new(uc);
        self
    }

    pub fn with_payment_history(mut self, uc: impl PaymentHistoryUseCase + 'static) -> Self {
        self.billing.history = Arc::new(uc);
        self
    }

    pub fn with_webhook(mut self, uc: impl ProcessWebhookUseCase + 'static) -> Self {
        self.billing.webhook = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            onboarding: self.onboarding,
            identity: self.identity,
            video: self.video,
            admin: self.admin,
            billing: self.billing,
        })
    }
}
