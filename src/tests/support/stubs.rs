//! Default use cases for `TestAppStateBuilder`. Each one fails with a
//! repository error so a route test only passes through the double it installs.
use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::admin::application::domain::{
    DashboardStats, PendingUser, ReviewDecision, UserDetails,
};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, ApproveUserUseCase, DashboardStatsUseCase, ListPendingUsersUseCase,
    RejectUserCommand, RejectUserUseCase, UserDetailsUseCase,
};
use crate::modules::admin::application::ports::outgoing::{AdminAccessError, AdminAccessGuard};
use crate::modules::auth::application::ports::incoming::use_cases::{
    OtpDispatch, RefreshAccessTokenCommand, RefreshAccessTokenError, RefreshAccessTokenUseCase,
    RefreshedAccessToken, SendOtpCommand, SendOtpError, SendOtpUseCase, SignInResult,
    SignInWithOtpError, SignInWithOtpUseCase, VerifyOtpCommand, VerifyOtpError,
};
use crate::modules::billing::application::domain::{PaymentOrder, Subscription};
use crate::modules::billing::application::ports::incoming::use_cases::{
    BillingError, CancelSubscriptionUseCase, CancellationReceipt, CheckoutSession,
    CreateCheckoutCommand, CreateCheckoutUseCase, CurrentSubscriptionUseCase,
    PaymentHistoryUseCase, PaymentStatusUseCase, ProcessWebhookUseCase, WebhookAck,
    WebhookDelivery,
};
use crate::modules::billing::application::ports::outgoing::GatewayOrderStatus;
use crate::modules::identity::application::ports::incoming::use_cases::{
    AwaitAuthenticationUseCase, CleanupExpiredSessionsUseCase, CompleteVerificationCommand,
    CompleteVerificationUseCase, IdentityStatus, IdentityStatusUseCase,
    IdentityVerificationError, InitiateVerificationCommand, InitiateVerificationUseCase,
    SessionCleanup, SessionProgress, SessionStatusUseCase, VerificationCompletion,
    VerificationInitiation,
};
use crate::modules::onboarding::application::ports::incoming::use_cases::{
    CountrySelection, GetOnboardingStatusError, GetOnboardingStatusUseCase, OnboardingProgress,
    SelectCountryCommand, SelectCountryError, SelectCountryUseCase,
};
use crate::modules::video::application::domain::VideoSubmission;
use crate::modules::video::application::ports::incoming::use_cases::{
    SubmitVideoCommand, SubmitVideoUseCase, VideoStatusUseCase, VideoSubmissionOutcome,
    VideoVerificationError,
};

const UNUSED: &str = "stub use case not configured for this test";

// auth

#[derive(Default, Clone)]
pub struct StubSendOtpUseCase;

#[async_trait]
impl SendOtpUseCase for StubSendOtpUseCase {
    async fn execute(&self, _command: SendOtpCommand) -> Result<OtpDispatch, SendOtpError> {
        Err(SendOtpError::RepositoryError(UNUSED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubSignInUseCase;

#[async_trait]
impl SignInWithOtpUseCase for StubSignInUseCase {
    async fn execute(&self, _command: VerifyOtpCommand) -> Result<SignInResult, SignInWithOtpError> {
        Err(VerifyOtpError::RepositoryError(UNUSED.into()).into())
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshAccessTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _command: RefreshAccessTokenCommand,
    ) -> Result<RefreshedAccessToken, RefreshAccessTokenError> {
        Err(RefreshAccessTokenError::RepositoryError(UNUSED.into()))
    }
}

// onboarding

#[derive(Default, Clone)]
pub struct StubSelectCountryUseCase;

#[async_trait]
impl SelectCountryUseCase for StubSelectCountryUseCase {
    async fn execute(
        &self,
        _command: SelectCountryCommand,
    ) -> Result<CountrySelection, SelectCountryError> {
        Err(SelectCountryError::RepositoryError(UNUSED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubOnboardingStatusUseCase;

#[async_trait]
impl GetOnboardingStatusUseCase for StubOnboardingStatusUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
    ) -> Result<OnboardingProgress, GetOnboardingStatusError> {
        Err(GetOnboardingStatusError::RepositoryError(UNUSED.into()))
    }
}

// identity

fn identity_unused() -> IdentityVerificationError {
    IdentityVerificationError::RepositoryError(UNUSED.into())
}

#[derive(Default, Clone)]
pub struct StubIdentityUseCase;

#[async_trait]
impl InitiateVerificationUseCase for StubIdentityUseCase {
    async fn execute(
        &self,
        _command: InitiateVerificationCommand,
    ) -> Result<VerificationInitiation, IdentityVerificationError> {
        Err(identity_unused())
    }
}

#[async_trait]
impl AwaitAuthenticationUseCase for StubIdentityUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _verification_id: &str,
    ) -> Result<SessionProgress, IdentityVerificationError> {
        Err(identity_unused())
    }
}

#[async_trait]
impl SessionStatusUseCase for StubIdentityUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _verification_id: &str,
    ) -> Result<SessionProgress, IdentityVerificationError> {
        Err(identity_unused())
    }
}

#[async_trait]
impl CompleteVerificationUseCase for StubIdentityUseCase {
    async fn execute(
        &self,
        _command: CompleteVerificationCommand,
    ) -> Result<VerificationCompletion, IdentityVerificationError> {
        Err(identity_unused())
    }
}

#[async_trait]
impl IdentityStatusUseCase for StubIdentityUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<IdentityStatus, IdentityVerificationError> {
        Err(identity_unused())
    }
}

#[async_trait]
impl CleanupExpiredSessionsUseCase for StubIdentityUseCase {
    async fn execute(&self) -> Result<SessionCleanup, IdentityVerificationError> {
        Err(identity_unused())
    }
}

// video

#[derive(Default, Clone)]
pub struct StubVideoUseCase;

#[async_trait]
impl SubmitVideoUseCase for StubVideoUseCase {
    async fn execute(
        &self,
        _command: SubmitVideoCommand,
    ) -> Result<VideoSubmissionOutcome, VideoVerificationError> {
        Err(VideoVerificationError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl VideoStatusUseCase for StubVideoUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<VideoSubmission, VideoVerificationError> {
        Err(VideoVerificationError::RepositoryError(UNUSED.into()))
    }
}

// admin

#[derive(Clone)]
pub struct StubAdminGuard {
    allow: bool,
}

impl StubAdminGuard {
    pub fn allowing() -> Self {
        Self { allow: true }
    }

    pub fn denying() -> Self {
        Self { allow: false }
    }
}

#[async_trait]
impl AdminAccessGuard for StubAdminGuard {
    async fn require_admin(&self, _user_id: Uuid) -> Result<(), AdminAccessError> {
        if self.allow {
            Ok(())
        } else {
            Err(AdminAccessError::NotAdmin)
        }
    }
}

#[derive(Default, Clone)]
pub struct StubAdminUseCase;

#[async_trait]
impl ListPendingUsersUseCase for StubAdminUseCase {
    async fn execute(&self) -> Result<Vec<PendingUser>, AdminError> {
        Err(AdminError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl UserDetailsUseCase for StubAdminUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserDetails, AdminError> {
        Err(AdminError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl ApproveUserUseCase for StubAdminUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<ReviewDecision, AdminError> {
        Err(AdminError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl RejectUserUseCase for StubAdminUseCase {
    async fn execute(&self, _command: RejectUserCommand) -> Result<ReviewDecision, AdminError> {
        Err(AdminError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl DashboardStatsUseCase for StubAdminUseCase {
    async fn execute(&self) -> Result<DashboardStats, AdminError> {
        Err(AdminError::RepositoryError(UNUSED.into()))
    }
}

// billing

#[derive(Default, Clone)]
pub struct StubBillingUseCase;

#[async_trait]
impl CreateCheckoutUseCase for StubBillingUseCase {
    async fn execute(
        &self,
        _command: CreateCheckoutCommand,
    ) -> Result<CheckoutSession, BillingError> {
        Err(BillingError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl CurrentSubscriptionUseCase for StubBillingUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Option<Subscription>, BillingError> {
        Err(BillingError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl CancelSubscriptionUseCase for StubBillingUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<CancellationReceipt, BillingError> {
        Err(BillingError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl PaymentStatusUseCase for StubBillingUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _order_id: &str,
    ) -> Result<GatewayOrderStatus, BillingError> {
        Err(BillingError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl PaymentHistoryUseCase for StubBillingUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<PaymentOrder>, BillingError> {
        Err(BillingError::RepositoryError(UNUSED.into()))
    }
}

#[async_trait]
impl ProcessWebhookUseCase for StubBillingUseCase {
    async fn execute(&self, _delivery: WebhookDelivery) -> Result<WebhookAck, BillingError> {
        Err(BillingError::RepositoryError(UNUSED.into()))
    }
}
