//! Fee rate configuration parsing from environment variables.
//!
//! Every rate falls back to the published schedule when unset.

use crate::domain::charges::FeeSchedule;
use anyhow::{Context, Result};
use std::env;

/// Rate table environment configuration
#[derive(Debug, Clone)]
pub struct RatesEnvConfig {
    pub base_rate: f64,
    pub per_download_rate: f64,
    pub standard_marginal_rate: f64,
    pub small_business_marginal_rate: f64,
    pub alternate_payment_discount: f64,
}

impl RatesEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = FeeSchedule::default();

        Ok(Self {
            base_rate: Self::parse_f64("BASE_RATE", defaults.base_rate)?,
            per_download_rate: Self::parse_f64("PER_DOWNLOAD_RATE", defaults.per_download_rate)?,
            standard_marginal_rate: Self::parse_f64(
                "STANDARD_MARGINAL_RATE",
                defaults.standard_marginal_rate,
            )?,
            small_business_marginal_rate: Self::parse_f64(
                "SMALL_BUSINESS_MARGINAL_RATE",
                defaults.small_business_marginal_rate,
            )?,
            alternate_payment_discount: Self::parse_f64(
                "ALTERNATE_PAYMENT_DISCOUNT",
                defaults.alternate_payment_discount,
            )?,
        })
    }

    pub fn to_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            base_rate: self.base_rate,
            per_download_rate: self.per_download_rate,
            standard_marginal_rate: self.standard_marginal_rate,
            small_business_marginal_rate: self.small_business_marginal_rate,
            alternate_payment_discount: self.alternate_payment_discount,
        }
    }

    fn parse_f64(key: &str, default: f64) -> Result<f64> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<f64>()
            .context(format!("Failed to parse {}", key))
    }
}
