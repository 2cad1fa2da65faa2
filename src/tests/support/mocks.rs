//! mockall doubles for ports whose behaviour is easier to script than to fake.
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::modules::billing::application::domain::PaymentReceipt;
use crate::modules::billing::application::ports::outgoing::{
    BillingLedger, BillingLedgerError, CancellationOutcome, FailureSettlement, SuccessSettlement,
};
use crate::modules::video::application::domain::{NewVideoSubmission, VideoSubmission};
use crate::modules::video::application::ports::outgoing::{
    VideoSubmissionRepository, VideoSubmissionRepositoryError,
};

mock! {
    pub Ledger {}

    #[async_trait]
    impl BillingLedger for Ledger {
        async fn settle_success(
            &self,
            receipt: PaymentReceipt,
        ) -> Result<SuccessSettlement, BillingLedgerError>;

        async fn settle_failure(
            &self,
            order_id: &str,
        ) -> Result<FailureSettlement, BillingLedgerError>;

        async fn cancel_subscription(
            &self,
            user_id: Uuid,
        ) -> Result<CancellationOutcome, BillingLedgerError>;
    }
}

mock! {
    pub Submissions {}

    #[async_trait]
    impl VideoSubmissionRepository for Submissions {
        async fn save(
            &self,
            submission: NewVideoSubmission,
        ) -> Result<VideoSubmission, VideoSubmissionRepositoryError>;

        async fn find_by_user(
            &self,
            user_id: Uuid,
        ) -> Result<Option<VideoSubmission>, VideoSubmissionRepositoryError>;
    }
}
