//! Configuration module for feescope.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Rates, Analysis and Display. Scenario files in TOML
//! can override the environment for headless runs.

mod analysis_env_config;
mod display_env_config;
mod rates_env_config;
mod scenario_file;

pub use analysis_env_config::AnalysisEnvConfig;
pub use display_env_config::DisplayEnvConfig;
pub use rates_env_config::RatesEnvConfig;
pub use scenario_file::{RatesOverride, ScenarioFile};

use crate::application::AnalysisRequest;
use crate::domain::charges::{BillingPeriod, FeeSchedule, ScenarioParameters};
use crate::domain::intersection::IntersectionStrategy;
use anyhow::{Context, Result};

/// Main application configuration.
///
/// This struct aggregates all configuration from sub-modules.
#[derive(Debug, Clone)]
pub struct Config {
    // Rates (from RatesEnvConfig)
    pub schedule: FeeSchedule,

    // Analysis (from AnalysisEnvConfig)
    pub max_revenue: f64,
    pub sample_count: usize,
    pub strategy: IntersectionStrategy,
    /// Tolerance used whenever the tolerance strategy is selected
    pub tolerance: f64,
    pub default_downloads: f64,
    pub period: BillingPeriod,

    // Display (from DisplayEnvConfig)
    pub window_width: f32,
    pub window_height: f32,
    pub chart_height: f32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let rates = RatesEnvConfig::from_env().context("Failed to load rates config")?;
        let analysis = AnalysisEnvConfig::from_env().context("Failed to load analysis config")?;
        let display = DisplayEnvConfig::from_env();

        let schedule = rates.to_schedule();
        schedule
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid rates config: {}", e))?;

        Ok(Self {
            schedule,

            max_revenue: analysis.max_revenue,
            sample_count: analysis.sample_count,
            strategy: analysis.strategy,
            tolerance: analysis.tolerance,
            default_downloads: analysis.default_downloads,
            period: analysis.period,

            window_width: display.window_width,
            window_height: display.window_height,
            chart_height: display.chart_height,
        })
    }

    /// Scenario shown before the user changes anything
    pub fn default_scenario(&self) -> ScenarioParameters {
        ScenarioParameters {
            downloads: self.default_downloads,
            period: self.period,
            ..Default::default()
        }
    }

    /// Create an AnalysisRequest for a scenario using the configured domain
    pub fn to_analysis_request(&self, scenario: ScenarioParameters) -> AnalysisRequest {
        AnalysisRequest {
            scenario,
            schedule: self.schedule,
            max_revenue: self.max_revenue,
            sample_count: self.sample_count,
            strategy: self.strategy,
        }
    }
}
