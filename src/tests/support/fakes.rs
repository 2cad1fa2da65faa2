//! In-memory doubles shared by service tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::OtpPurpose;
use crate::modules::auth::application::ports::outgoing::{OtpAuditError, OtpAuditRepository};
use crate::modules::billing::application::domain::{
    NewPaymentOrder, PaymentOrder, PaymentOrderStatus, Subscription,
};
use crate::modules::billing::application::ports::outgoing::{
    CreateOrderRequest, GatewayError, GatewayOrder, GatewayOrderStatus, PaymentGateway,
    PaymentOrderRepository, PaymentOrderRepositoryError, SubscriptionRepository,
    SubscriptionRepositoryError,
};
use crate::modules::identity::application::domain::{
    FlowType, IdentityVerification, NewVerificationSession, SessionStatus, VerificationSession,
    VerificationStatus,
};
use crate::modules::identity::application::ports::outgoing::{
    AuthenticationState, IdentityLedger, IdentityLedgerError, IdentityProvider, ProviderError,
    ProviderOutcome, ProviderSession, RejectionOutcome, StartSessionRequest,
    UserVerificationRepository, UserVerificationRepositoryError, VerificationSessionRepository,
    VerificationSessionRepositoryError,
};
use crate::modules::email::application::ports::outgoing::{NotificationError, OnboardingNotifier};
use crate::modules::onboarding::application::domain::{
    OnboardingStatus, Role, Transition, UserAccount, VerificationMethod,
};
use crate::modules::onboarding::application::ports::incoming::use_cases::TransitionFailure;
use crate::modules::onboarding::application::ports::outgoing::{
    NewUser, UserRepository, UserRepositoryError,
};
use crate::modules::video::application::domain::{NewVideoSubmission, VideoSubmission};
use crate::modules::video::application::ports::outgoing::{
    VideoSubmissionRepository, VideoSubmissionRepositoryError,
};

#[derive(Default)]
struct UsersInner {
    rows: HashMap<Uuid, UserAccount>,
    cas_override: Option<OnboardingStatus>,
}

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    inner: Arc<Mutex<UsersInner>>,
}

impl InMemoryUsers {
    pub fn seed(&self, email: &str, username: &str, status: OnboardingStatus) -> UserAccount {
        self.insert(email, username, status, Role::Individual)
    }

    pub fn seed_admin(&self, email: &str, username: &str) -> UserAccount {
        self.insert(email, username, OnboardingStatus::Active, Role::Admin)
    }

    fn insert(
        &self,
        email: &str,
        username: &str,
        status: OnboardingStatus,
        role: Role,
    ) -> UserAccount {
        let now = Utc::now();
        let user = UserAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
            role,
            status,
            country: None,
            name: None,
            phone_number: None,
            created_at: now,
            updated_at: now,
        };
        self.inner
            .lock()
            .unwrap()
            .rows
            .insert(user.id, user.clone());
        user
    }

    pub fn get(&self, id: Uuid) -> Option<UserAccount> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn find_email(&self, email: &str) -> Option<UserAccount> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn status_of(&self, id: Uuid) -> Option<OnboardingStatus> {
        self.get(id).map(|u| u.status)
    }

    pub fn set_country_direct(&self, id: Uuid, country: &str) {
        if let Some(user) = self.inner.lock().unwrap().rows.get_mut(&id) {
            user.country = Some(country.to_string());
        }
    }

    /// The next compare-and-set loses: the row is moved to `winner` instead.
    pub fn fail_next_compare_and_set(&self, winner: OnboardingStatus) {
        self.inner.lock().unwrap().cas_override = Some(winner);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    fn swap_status(
        &self,
        id: Uuid,
        expected: OnboardingStatus,
        next: OnboardingStatus,
    ) -> Result<bool, UserRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let winner = inner.cas_override.take();
        let user = inner
            .rows
            .get_mut(&id)
            .ok_or(UserRepositoryError::NotFound)?;

        if let Some(winner) = winner {
            user.status = winner;
            return Ok(false);
        }
        if user.status != expected {
            return Ok(false);
        }
        user.status = next;
        user.updated_at = Utc::now();
        Ok(true)
    }

    /// Guarded status move, the way the SQL writer applies it inside a transaction.
    pub fn apply_transition(
        &self,
        id: Uuid,
        transition: Transition,
    ) -> Result<OnboardingStatus, TransitionFailure> {
        let current = self.status_of(id).ok_or(TransitionFailure::UserNotFound)?;
        let next = transition.apply(current).map_err(TransitionFailure::Guard)?;
        let written = self
            .swap_status(id, current, next)
            .map_err(|e| TransitionFailure::RepositoryError(e.to_string()))?;
        if !written {
            return Err(TransitionFailure::RepositoryError(
                "Status changed concurrently".to_string(),
            ));
        }
        Ok(next)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> Result<UserAccount, UserRepositoryError> {
        {
            let inner = self.inner.lock().unwrap();
            if inner.rows.values().any(|u| u.email == user.email) {
                return Err(UserRepositoryError::EmailTaken);
            }
            if inner.rows.values().any(|u| u.username == user.username) {
                return Err(UserRepositoryError::UsernameTaken);
            }
        }
        Ok(self.seed(&user.email, &user.username, OnboardingStatus::Registered))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserAccount>, UserRepositoryError> {
        Ok(self.get(id))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserRepositoryError> {
        Ok(self.find_email(email))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .any(|u| u.username == username))
    }

    async fn set_country(
        &self,
        id: Uuid,
        country: &str,
    ) -> Result<UserAccount, UserRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner
            .rows
            .get_mut(&id)
            .ok_or(UserRepositoryError::NotFound)?;
        user.country = Some(country.to_string());
        Ok(user.clone())
    }

    async fn compare_and_set_status(
        &self,
        id: Uuid,
        expected: OnboardingStatus,
        next: OnboardingStatus,
    ) -> Result<bool, UserRepositoryError> {
        self.swap_status(id, expected, next)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SentNotification {
    Otp { to: String, code: String, purpose: OtpPurpose },
    VerificationPending { to: String },
    VerificationApproved { to: String },
    VerificationRejected { to: String, reason: String },
    PaymentCompleted { to: String, plan_name: String },
    SubscriptionCancelled { to: String, plan_name: String },
}

/// Records every notification; optionally fails all of them.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            failing: true,
        }
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    /// Gives background notification tasks a chance to run.
    pub async fn settle(&self) {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    fn record(&self, n: SentNotification) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(n);
        if self.failing {
            Err(NotificationError::SendFailed("smtp down".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OnboardingNotifier for RecordingNotifier {
    async fn send_otp(
        &self,
        to: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<(), NotificationError> {
        self.record(SentNotification::Otp {
            to: to.to_string(),
            code: code.to_string(),
            purpose,
        })
    }

    async fn verification_pending(
        &self,
        to: &str,
        _username: &str,
    ) -> Result<(), NotificationError> {
        self.record(SentNotification::VerificationPending { to: to.to_string() })
    }

    async fn verification_approved(
        &self,
        to: &str,
        _username: &str,
    ) -> Result<(), NotificationError> {
        self.record(SentNotification::VerificationApproved { to: to.to_string() })
    }

    async fn verification_rejected(
        &self,
        to: &str,
        _username: &str,
        reason: &str,
    ) -> Result<(), NotificationError> {
        self.record(SentNotification::VerificationRejected {
            to: to.to_string(),
            reason: reason.to_string(),
        })
    }

    async fn payment_completed(
        &self,
        to: &str,
        _username: &str,
        plan_name: &str,
        _amount: f64,
        _currency: &str,
    ) -> Result<(), NotificationError> {
        self.record(SentNotification::PaymentCompleted {
            to: to.to_string(),
            plan_name: plan_name.to_string(),
        })
    }

    async fn subscription_cancelled(
        &self,
        to: &str,
        _username: &str,
        plan_name: &str,
    ) -> Result<(), NotificationError> {
        self.record(SentNotification::SubscriptionCancelled {
            to: to.to_string(),
            plan_name: plan_name.to_string(),
        })
    }
}

#[derive(Clone, Default)]
pub struct InMemorySessions {
    rows: Arc<Mutex<HashMap<String, VerificationSession>>>,
}

impl InMemorySessions {
    pub fn insert(&self, session: VerificationSession) {
        self.rows
            .lock()
            .unwrap()
            .insert(session.verification_id.clone(), session);
    }

    pub fn get(&self, verification_id: &str) -> Option<VerificationSession> {
        self.rows.lock().unwrap().get(verification_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// A session owned by `user_id` in the given state.
    pub fn seed(
        &self,
        verification_id: &str,
        user_id: Uuid,
        method: VerificationMethod,
        status: SessionStatus,
        created_at: DateTime<Utc>,
    ) -> VerificationSession {
        let session = VerificationSession {
            verification_id: verification_id.to_string(),
            user_id,
            method,
            mobile_number: None,
            status,
            flow_type: None,
            consent_url: None,
            provider_account_id: None,
            created_at,
        };
        self.insert(session.clone());
        session
    }
}

#[async_trait]
impl VerificationSessionRepository for InMemorySessions {
    async fn create(
        &self,
        session: NewVerificationSession,
    ) -> Result<VerificationSession, VerificationSessionRepositoryError> {
        let stored = VerificationSession {
            verification_id: session.verification_id,
            user_id: session.user_id,
            method: session.method,
            mobile_number: session.mobile_number,
            status: SessionStatus::Initiated,
            flow_type: session.flow_type,
            consent_url: session.consent_url,
            provider_account_id: session.provider_account_id,
            created_at: Utc::now(),
        };
        self.insert(stored.clone());
        Ok(stored)
    }

    async fn find_by_verification_id(
        &self,
        verification_id: &str,
    ) -> Result<Option<VerificationSession>, VerificationSessionRepositoryError> {
        Ok(self.get(verification_id))
    }

    async fn update_status(
        &self,
        verification_id: &str,
        status: SessionStatus,
    ) -> Result<(), VerificationSessionRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let session = rows
            .get_mut(verification_id)
            .ok_or(VerificationSessionRepositoryError::NotFound)?;
        session.status = status;
        Ok(())
    }

    async fn delete(&self, verification_id: &str) -> Result<(), VerificationSessionRepositoryError> {
        self.rows.lock().unwrap().remove(verification_id);
        Ok(())
    }

    async fn delete_incomplete_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<u64, VerificationSessionRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, s| s.user_id != user_id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_created_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, VerificationSessionRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, s| s.created_at > cutoff);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryVerifications {
    rows: Arc<Mutex<HashMap<Uuid, IdentityVerification>>>,
}

impl InMemoryVerifications {
    pub fn insert(&self, verification: IdentityVerification) {
        self.rows
            .lock()
            .unwrap()
            .insert(verification.user_id, verification);
    }

    pub fn get(&self, user_id: Uuid) -> Option<IdentityVerification> {
        self.rows.lock().unwrap().get(&user_id).cloned()
    }
}

#[async_trait]
impl UserVerificationRepository for InMemoryVerifications {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<IdentityVerification>, UserVerificationRepositoryError> {
        Ok(self.get(user_id))
    }

    async fn find_by_provider_account(
        &self,
        provider_account_id: &str,
    ) -> Result<Option<IdentityVerification>, UserVerificationRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|v| v.provider_account_id.as_deref() == Some(provider_account_id))
            .cloned())
    }

    async fn upsert(
        &self,
        verification: IdentityVerification,
    ) -> Result<IdentityVerification, UserVerificationRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(account) = verification.provider_account_id.as_deref() {
            let taken = rows.values().any(|v| {
                v.user_id != verification.user_id
                    && v.provider_account_id.as_deref() == Some(account)
            });
            if taken {
                return Err(UserVerificationRepositoryError::ProviderAccountTaken);
            }
        }
        rows.insert(verification.user_id, verification.clone());
        Ok(verification)
    }

    async fn mark_rejected(
        &self,
        user_id: Uuid,
        reason: &str,
    ) -> Result<(), UserVerificationRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&user_id)
            .ok_or(UserVerificationRepositoryError::NotFound)?;
        row.status = VerificationStatus::Rejected;
        row.rejection_reason = Some(reason.to_string());
        Ok(())
    }
}

/// Identity ledger over the in-memory tables. The status move runs first and
/// nothing else is written when it fails, like a rolled-back transaction.
#[derive(Clone)]
pub struct InMemoryIdentityLedger {
    users: InMemoryUsers,
    sessions: InMemorySessions,
    verifications: InMemoryVerifications,
}

impl InMemoryIdentityLedger {
    pub fn new(
        users: &InMemoryUsers,
        sessions: &InMemorySessions,
        verifications: &InMemoryVerifications,
    ) -> Self {
        Self {
            users: users.clone(),
            sessions: sessions.clone(),
            verifications: verifications.clone(),
        }
    }
}

#[async_trait]
impl IdentityLedger for InMemoryIdentityLedger {
    async fn record_verified(
        &self,
        verification: IdentityVerification,
        verification_id: &str,
    ) -> Result<IdentityVerification, IdentityLedgerError> {
        if let Some(account) = verification.provider_account_id.as_deref() {
            let holder = self
                .verifications
                .find_by_provider_account(account)
                .await
                .map_err(|e| IdentityLedgerError::DatabaseError(e.to_string()))?;
            if holder.is_some_and(|h| h.claimed_by_other(verification.user_id)) {
                return Err(IdentityLedgerError::ProviderAccountTaken);
            }
        }

        self.users
            .apply_transition(verification.user_id, Transition::VerifyIdentity)
            .map_err(IdentityLedgerError::Transition)?;
        self.verifications.insert(verification.clone());
        self.sessions.rows.lock().unwrap().remove(verification_id);
        Ok(verification)
    }

    async fn record_rejection(
        &self,
        user_id: Uuid,
        reason: &str,
    ) -> Result<RejectionOutcome, IdentityLedgerError> {
        self.users
            .apply_transition(user_id, Transition::Reject)
            .map_err(IdentityLedgerError::Transition)?;
        match self.verifications.mark_rejected(user_id, reason).await {
            Ok(()) => Ok(RejectionOutcome::Rejected),
            Err(UserVerificationRepositoryError::NotFound) => {
                Ok(RejectionOutcome::NoVerificationRecord)
            }
            Err(e) => Err(IdentityLedgerError::DatabaseError(e.to_string())),
        }
    }
}

/// Identity provider with canned answers for each protocol step.
#[derive(Clone)]
pub struct ScriptedProvider {
    pub method: VerificationMethod,
    pub locker_style: bool,
    pub existing_account: Option<String>,
    pub session_ref: Option<String>,
    pub authentication: Result<AuthenticationState, ProviderError>,
    pub outcome: Result<ProviderOutcome, ProviderError>,
    started: Arc<Mutex<Vec<StartSessionRequest>>>,
}

impl ScriptedProvider {
    pub fn locker(outcome: ProviderOutcome) -> Self {
        Self {
            method: VerificationMethod::Digilocker,
            locker_style: true,
            existing_account: None,
            session_ref: None,
            authentication: Ok(AuthenticationState::Authenticated),
            outcome: Ok(outcome),
            started: Arc::default(),
        }
    }

    pub fn hosted(session_ref: &str, outcome: ProviderOutcome) -> Self {
        Self {
            method: VerificationMethod::StripeIdentity,
            locker_style: false,
            existing_account: None,
            session_ref: Some(session_ref.to_string()),
            authentication: Ok(AuthenticationState::Pending),
            outcome: Ok(outcome),
            started: Arc::default(),
        }
    }

    pub fn started(&self) -> Vec<StartSessionRequest> {
        self.started.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for ScriptedProvider {
    fn method(&self) -> VerificationMethod {
        self.method
    }

    fn requires_mobile_number(&self) -> bool {
        self.locker_style
    }

    fn requires_declared_data(&self) -> bool {
        self.locker_style
    }

    async fn find_existing_account(
        &self,
        _verification_id: &str,
        _mobile_number: Option<&str>,
    ) -> Result<Option<String>, ProviderError> {
        Ok(self.existing_account.clone())
    }

    async fn start_session(
        &self,
        request: StartSessionRequest,
    ) -> Result<ProviderSession, ProviderError> {
        self.started.lock().unwrap().push(request.clone());
        let session_ref = self
            .session_ref
            .clone()
            .unwrap_or_else(|| request.verification_id.clone());
        let flow_type = self.locker_style.then(|| {
            if request.existing_account_id.is_some() {
                FlowType::Signin
            } else {
                FlowType::Signup
            }
        });
        Ok(ProviderSession {
            redirect_url: format!("https://provider.test/consent/{}", session_ref),
            session_ref,
            client_secret: None,
            flow_type,
        })
    }

    async fn poll_authentication(
        &self,
        _session_ref: &str,
    ) -> Result<AuthenticationState, ProviderError> {
        self.authentication.clone()
    }

    async fn fetch_verified_data(
        &self,
        _session_ref: &str,
    ) -> Result<ProviderOutcome, ProviderError> {
        self.outcome.clone()
    }
}

/// Payment orders in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryOrders {
    rows: Arc<Mutex<Vec<PaymentOrder>>>,
}

impl InMemoryOrders {
    pub fn get(&self, order_id: &str) -> Option<PaymentOrder> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentOrderRepository for InMemoryOrders {
    async fn create(
        &self,
        order: NewPaymentOrder,
    ) -> Result<PaymentOrder, PaymentOrderRepositoryError> {
        let stored = PaymentOrder {
            order_id: order.order_id,
            user_id: order.user_id,
            plan_id: order.plan_id,
            amount: order.amount,
            currency: order.currency,
            status: PaymentOrderStatus::Pending,
            is_subscription: order.is_subscription,
            payment_session_id: order.payment_session_id,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<PaymentOrder>, PaymentOrderRepositoryError> {
        Ok(self.get(order_id))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PaymentOrder>, PaymentOrderRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySubscriptions {
    rows: Arc<Mutex<HashMap<Uuid, Subscription>>>,
}

impl InMemorySubscriptions {
    pub fn insert(&self, subscription: Subscription) {
        self.rows
            .lock()
            .unwrap()
            .insert(subscription.user_id, subscription);
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, SubscriptionRepositoryError> {
        Ok(self.rows.lock().unwrap().get(&user_id).cloned())
    }
}

/// Payment gateway that echoes orders back with a fixed session id.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    failure: Option<GatewayError>,
    requests: Arc<Mutex<Vec<CreateOrderRequest>>>,
}

impl ScriptedGateway {
    pub fn failing(error: GatewayError) -> Self {
        Self {
            failure: Some(error),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<CreateOrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<GatewayOrder, GatewayError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let order_id = request.order_id.clone();
        self.requests.lock().unwrap().push(request);
        Ok(GatewayOrder {
            payment_session_id: format!("session_{}", order_id),
            checkout_url: format!("https://payments-test.cashfree.com/order/#session_{}", order_id),
            order_id,
        })
    }

    async fn order_status(&self, order_id: &str) -> Result<GatewayOrderStatus, GatewayError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(GatewayOrderStatus {
            order_id: order_id.to_string(),
            status: "ACTIVE".to_string(),
            amount: Some(9.99),
            currency: Some("USD".to_string()),
        })
    }
}

/// OTP audit over the in-memory users. The row is kept only when the status
/// move succeeds; a failing audit writes nothing at all.
#[derive(Clone)]
pub struct InMemoryOtpAudit {
    users: InMemoryUsers,
    failing: bool,
    rows: Arc<Mutex<Vec<Uuid>>>,
}

impl InMemoryOtpAudit {
    pub fn new(users: &InMemoryUsers) -> Self {
        Self {
            users: users.clone(),
            failing: false,
            rows: Arc::default(),
        }
    }

    pub fn failing(users: &InMemoryUsers) -> Self {
        Self {
            failing: true,
            ..Self::new(users)
        }
    }

    pub fn recorded(&self) -> Vec<Uuid> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl OtpAuditRepository for InMemoryOtpAudit {
    async fn confirm_registration(
        &self,
        user_id: Uuid,
        _code: &str,
        _expires_at: DateTime<Utc>,
        _attempts: u32,
    ) -> Result<(), OtpAuditError> {
        if self.failing {
            return Err(OtpAuditError::DatabaseError("connection reset".to_string()));
        }
        self.users
            .apply_transition(user_id, Transition::VerifyEmail)
            .map_err(OtpAuditError::Transition)?;
        self.rows.lock().unwrap().push(user_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySubmissions {
    rows: Arc<Mutex<HashMap<Uuid, VideoSubmission>>>,
}

#[async_trait]
impl VideoSubmissionRepository for InMemorySubmissions {
    async fn save(
        &self,
        submission: NewVideoSubmission,
    ) -> Result<VideoSubmission, VideoSubmissionRepositoryError> {
        let stored = VideoSubmission {
            user_id: submission.user_id,
            photo_url: submission.photo_url,
            video_url: submission.video_url,
            status: submission.status,
            submitted_at: Utc::now(),
        };
        self.rows
            .lock()
            .unwrap()
            .insert(stored.user_id, stored.clone());
        Ok(stored)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<VideoSubmission>, VideoSubmissionRepositoryError> {
        Ok(self.rows.lock().unwrap().get(&user_id).cloned())
    }
}
