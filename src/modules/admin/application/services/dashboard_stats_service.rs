use async_trait::async_trait;
use tracing::info;

use crate::modules::admin::application::domain::{ConversionRates, DashboardStats};
use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminError, DashboardStatsUseCase,
};
use crate::modules::admin::application::ports::outgoing::AdminQuery;
use crate::modules::billing::application::domain::PlanCatalog;
use crate::modules::onboarding::application::domain::OnboardingStatus;

pub struct DashboardStatsService<Q>
where
    Q: AdminQuery,
{
    query: Q,
    catalog: PlanCatalog,
}

impl<Q> DashboardStatsService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q, catalog: PlanCatalog) -> Self {
        Self { query, catalog }
    }
}

#[async_trait]
impl<Q> DashboardStatsUseCase for DashboardStatsService<Q>
where
    Q: AdminQuery,
{
    async fn execute(&self) -> Result<DashboardStats, AdminError> {
        let started = std::time::Instant::now();

        let counts = self.query.status_counts().await?;
        let rejected_users = self.query.rejected_verification_count().await?;
        let plans = self.query.active_subscription_plans().await?;

        // Plans no longer in the catalog contribute nothing.
        let revenue: f64 = plans
            .iter()
            .filter_map(|name| self.catalog.price_for_name(name))
            .sum();

        let stats = DashboardStats {
            total_users: counts.total(),
            active_users: counts.of(OnboardingStatus::Active),
            pending_approval: counts.of(OnboardingStatus::VideoVerified),
            rejected_users,
            total_revenue: (revenue * 100.0).round() / 100.0,
            conversion_rates: ConversionRates::from_counts(&counts),
        };

        info!(
            total_users = stats.total_users,
            active_users = stats.active_users,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dashboard statistics computed"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::domain::{PendingUser, StatusCounts};
    use crate::modules::admin::application::ports::outgoing::AdminQueryError;
    use maplit::hashmap;

    struct FixedQuery {
        fail: bool,
    }

    #[async_trait]
    impl AdminQuery for FixedQuery {
        async fn pending_users(&self) -> Result<Vec<PendingUser>, AdminQueryError> {
            Ok(vec![])
        }

        async fn status_counts(&self) -> Result<StatusCounts, AdminQueryError> {
            if self.fail {
                return Err(AdminQueryError::DatabaseError("timeout".to_string()));
            }
            Ok(StatusCounts::new(hashmap! {
                OnboardingStatus::Registered => 5,
                OnboardingStatus::VideoVerified => 2,
                OnboardingStatus::Active => 3,
            }))
        }

        async fn rejected_verification_count(&self) -> Result<u64, AdminQueryError> {
            Ok(1)
        }

        async fn active_subscription_plans(&self) -> Result<Vec<String>, AdminQueryError> {
            Ok(vec![
                "Pro".to_string(),
                "Premium".to_string(),
                "Enterprise".to_string(),
                "Legacy".to_string(),
            ])
        }
    }

    #[tokio::test]
    async fn stats_aggregate_counts_and_revenue() {
        let service =
            DashboardStatsService::new(FixedQuery { fail: false }, PlanCatalog::standard());

        let stats = service.execute().await.unwrap();

        assert_eq!(stats.total_users, 10);
        assert_eq!(stats.active_users, 3);
        assert_eq!(stats.pending_approval, 2);
        assert_eq!(stats.rejected_users, 1);
        assert_eq!(stats.total_revenue, 229.97);
        assert_eq!(stats.conversion_rates.email_verification, "50.00");
        assert_eq!(stats.conversion_rates.admin_approval, "60.00");
    }

    #[tokio::test]
    async fn query_failure_is_a_repository_error() {
        let service =
            DashboardStatsService::new(FixedQuery { fail: true }, PlanCatalog::standard());

        assert!(matches!(
            service.execute().await,
            Err(AdminError::RepositoryError(_))
        ));
    }
}
