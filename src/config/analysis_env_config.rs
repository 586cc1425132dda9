//! Analysis configuration parsing from environment variables.
//!
//! This module handles the revenue domain, sampling density, crossing
//! detection and the default scenario shown at startup.

use crate::domain::charges::BillingPeriod;
use crate::domain::intersection::{DEFAULT_TOLERANCE, IntersectionStrategy};
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Analysis environment configuration
#[derive(Debug, Clone)]
pub struct AnalysisEnvConfig {
    pub max_revenue: f64,
    pub sample_count: usize,
    pub strategy: IntersectionStrategy,
    pub tolerance: f64,
    pub default_downloads: f64,
    pub period: BillingPeriod,
}

impl AnalysisEnvConfig {
    pub fn from_env() -> Result<Self> {
        let tolerance = Self::parse_f64("INTERSECTION_TOLERANCE", DEFAULT_TOLERANCE)?;
        let strategy_str =
            env::var("INTERSECTION_STRATEGY").unwrap_or_else(|_| "bracketing".to_string());
        let strategy = IntersectionStrategy::parse_with_tolerance(&strategy_str, tolerance)?;

        let period_str = env::var("BILLING_PERIOD").unwrap_or_else(|_| "yearly".to_string());
        let period = BillingPeriod::from_str(&period_str)?;

        Ok(Self {
            max_revenue: Self::parse_f64("MAX_REVENUE", 1000.0)?,
            sample_count: Self::parse_usize("SAMPLE_COUNT", 10_000)?,
            strategy,
            tolerance,
            default_downloads: Self::parse_f64("DEFAULT_DOWNLOADS", 100.0)?,
            period,
        })
    }

    fn parse_usize(key: &str, default: usize) -> Result<usize> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<usize>()
            .context(format!("Failed to parse {}", key))
    }

    fn parse_f64(key: &str, default: f64) -> Result<f64> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<f64>()
            .context(format!("Failed to parse {}", key))
    }
}
