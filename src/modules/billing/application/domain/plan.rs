use chrono::{DateTime, Months, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Individual,
    Company,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Individual => "INDIVIDUAL",
            PlanType::Company => "COMPANY",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL" => Ok(PlanType::Individual),
            "COMPANY" => Ok(PlanType::Company),
            other => Err(format!("Unknown plan type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Yearly => 12,
        }
    }

    /// End of the paid window starting at `start`. Month ends clamp, so Jan 31 runs to Feb 28/29.
    pub fn period_end(&self, start: DateTime<Utc>) -> DateTime<Utc> {
        start
            .checked_add_months(Months::new(self.months()))
            .unwrap_or(start)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    pub plan_type: PlanType,
    pub price: f64,
    pub currency: &'static str,
    pub cycle: BillingCycle,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanListing {
    pub individual_plans: Vec<Plan>,
    pub company_plans: Vec<Plan>,
}

/// The fixed set of purchasable plans.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    pub fn standard() -> Self {
        Self {
            plans: vec![
                Plan {
                    id: "price_individual_pro",
                    name: "Pro",
                    plan_type: PlanType::Individual,
                    price: 9.99,
                    currency: "USD",
                    cycle: BillingCycle::Monthly,
                    features: vec!["1:1 calls", "Post feature", "Job applications"],
                },
                Plan {
                    id: "price_individual_premium",
                    name: "Premium",
                    plan_type: PlanType::Individual,
                    price: 19.99,
                    currency: "USD",
                    cycle: BillingCycle::Monthly,
                    features: vec![
                        "Unlimited 1:1 calls",
                        "Post feature",
                        "Job applications",
                        "AI summaries",
                    ],
                },
                Plan {
                    id: "price_company_startup",
                    name: "Startup",
                    plan_type: PlanType::Company,
                    price: 49.99,
                    currency: "USD",
                    cycle: BillingCycle::Monthly,
                    features: vec!["Up to 5 job postings", "Applicant tracking"],
                },
                Plan {
                    id: "price_company_enterprise",
                    name: "Enterprise",
                    plan_type: PlanType::Company,
                    price: 199.99,
                    currency: "USD",
                    cycle: BillingCycle::Monthly,
                    features: vec![
                        "Unlimited job postings",
                        "Advanced analytics",
                        "Dedicated support",
                    ],
                },
            ],
        }
    }

    pub fn find(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    pub fn price_for_name(&self, plan_name: &str) -> Option<f64> {
        self.plans
            .iter()
            .find(|p| p.name == plan_name)
            .map(|p| p.price)
    }

    pub fn listing(&self) -> PlanListing {
        let of_type = |t: PlanType| -> Vec<Plan> {
            self.plans
                .iter()
                .filter(|p| p.plan_type == t)
                .cloned()
                .collect()
        };
        PlanListing {
            individual_plans: of_type(PlanType::Individual),
            company_plans: of_type(PlanType::Company),
        }
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
