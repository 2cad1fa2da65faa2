use serde::Serialize;
use std::collections::HashMap;

use crate::modules::onboarding::application::domain::OnboardingStatus;

/// Number of users currently holding each status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusCounts {
    counts: HashMap<OnboardingStatus, u64>,
}

impl StatusCounts {
    pub fn new(counts: HashMap<OnboardingStatus, u64>) -> Self {
        Self { counts }
    }

    pub fn of(&self, status: OnboardingStatus) -> u64 {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Users that have reached `status` or any later one.
    pub fn at_least(&self, status: OnboardingStatus) -> u64 {
        self.counts
            .iter()
            .filter(|(s, _)| **s >= status)
            .map(|(_, n)| n)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRates {
    pub email_verification: String,
    pub id_verification: String,
    pub video_verification: String,
    pub admin_approval: String,
    pub final_activation: String,
}

impl ConversionRates {
    pub fn from_counts(counts: &StatusCounts) -> Self {
        let total = counts.total();
        let email = counts.at_least(OnboardingStatus::EmailVerified);
        let id = counts.at_least(OnboardingStatus::IdVerified);
        let video = counts.at_least(OnboardingStatus::VideoVerified);
        let approved = counts.at_least(OnboardingStatus::Approved);
        let active = counts.of(OnboardingStatus::Active);

        Self {
            email_verification: conversion_rate(email, total),
            id_verification: conversion_rate(id, email),
            video_verification: conversion_rate(video, id),
            admin_approval: conversion_rate(approved, video),
            final_activation: conversion_rate(active, approved),
        }
    }
}

/// Percentage with two decimals, or `"0"` when nobody reached the prior stage.
pub fn conversion_rate(reached: u64, eligible: u64) -> String {
    if eligible == 0 {
        return "0".to_string();
    }
    format!("{:.2}", reached as f64 / eligible as f64 * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub pending_approval: u64,
    pub rejected_users: u64,
    pub total_revenue: f64,
    pub conversion_rates: ConversionRates,
}
