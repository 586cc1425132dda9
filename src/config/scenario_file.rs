//! TOML scenario files for headless runs.
//!
//! ```toml
//! downloads = 250.0
//! small_business_program = "Yes"
//! period = "monthly"
//! strategy = "tolerance"
//! tolerance = 0.05
//!
//! [rates]
//! per_download_rate = 0.5
//! ```

use crate::application::AnalysisRequest;
use crate::domain::charges::{BillingPeriod, FeeSchedule, YesNo};
use crate::domain::intersection::IntersectionStrategy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Partial scenario: every field present overrides the request it is applied to
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub downloads: Option<f64>,
    pub max_revenue: Option<f64>,
    pub sample_count: Option<usize>,
    pub small_business_program: Option<YesNo>,
    pub alternate_payment_processing: Option<YesNo>,
    pub third_party_store: Option<YesNo>,
    pub period: Option<BillingPeriod>,
    pub strategy: Option<String>,
    pub tolerance: Option<f64>,
    pub rates: Option<RatesOverride>,
}

/// `[rates]` table: each listed rate replaces the one already configured
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RatesOverride {
    pub base_rate: Option<f64>,
    pub per_download_rate: Option<f64>,
    pub standard_marginal_rate: Option<f64>,
    pub small_business_marginal_rate: Option<f64>,
    pub alternate_payment_discount: Option<f64>,
}

impl RatesOverride {
    pub fn apply(&self, schedule: &mut FeeSchedule) {
        let fields = [
            (&mut schedule.base_rate, self.base_rate),
            (&mut schedule.per_download_rate, self.per_download_rate),
            (&mut schedule.standard_marginal_rate, self.standard_marginal_rate),
            (
                &mut schedule.small_business_marginal_rate,
                self.small_business_marginal_rate,
            ),
            (
                &mut schedule.alternate_payment_discount,
                self.alternate_payment_discount,
            ),
        ];
        for (rate, value) in fields {
            if let Some(value) = value {
                *rate = value;
            }
        }
    }
}

impl ScenarioFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read scenario file: {}", path.display()))?;
        Self::parse(&content)
            .context(format!("Failed to parse scenario TOML: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the overrides. Selecting the tolerance strategy by name keeps
    /// the request's current tolerance, or `configured_tolerance` when the
    /// request was bracketing.
    pub fn apply(&self, request: &mut AnalysisRequest, configured_tolerance: f64) -> Result<()> {
        let scenario = &mut request.scenario;
        if let Some(downloads) = self.downloads {
            scenario.downloads = downloads;
        }
        if let Some(answer) = self.small_business_program {
            scenario.small_business_program = answer.is_yes();
        }
        if let Some(answer) = self.alternate_payment_processing {
            scenario.alternate_payment_processing = answer.is_yes();
        }
        if let Some(answer) = self.third_party_store {
            scenario.third_party_store = answer.is_yes();
        }
        if let Some(period) = self.period {
            scenario.period = period;
        }

        if let Some(max_revenue) = self.max_revenue {
            request.max_revenue = max_revenue;
        }
        if let Some(sample_count) = self.sample_count {
            request.sample_count = sample_count;
        }
        if let Some(strategy) = &self.strategy {
            let carried = request.strategy.epsilon().unwrap_or(configured_tolerance);
            request.strategy = IntersectionStrategy::parse_with_tolerance(strategy, carried)?;
        }
        if let Some(tolerance) = self.tolerance {
            request.strategy = request.strategy.with_tolerance(tolerance);
        }
        if let Some(rates) = &self.rates {
            rates.apply(&mut request.schedule);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intersection::DEFAULT_TOLERANCE;

    #[test]
    fn test_parse_and_apply() {
        let file = ScenarioFile::parse(
            r#"
            downloads = 250.0
            small_business_program = "Yes"
            third_party_store = "No"
            period = "monthly"
            strategy = "tolerance"
            tolerance = 0.05

            [rates]
            per_download_rate = 0.5
            "#,
        )
        .unwrap();

        let mut request = AnalysisRequest::default();
        file.apply(&mut request, DEFAULT_TOLERANCE).unwrap();

        assert_eq!(request.scenario.downloads, 250.0);
        assert!(request.scenario.small_business_program);
        assert!(!request.scenario.third_party_store);
        assert_eq!(request.scenario.period, BillingPeriod::Monthly);
        assert_eq!(
            request.strategy,
            IntersectionStrategy::Tolerance { epsilon: 0.05 }
        );
        assert_eq!(request.schedule.per_download_rate, 0.5);
        // Unlisted rates keep their configured values
        assert_eq!(request.schedule.base_rate, 0.30);
        assert_eq!(request.max_revenue, 1000.0);
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let file = ScenarioFile::parse("").unwrap();
        let mut request = AnalysisRequest::default();
        file.apply(&mut request, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(request, AnalysisRequest::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(ScenarioFile::parse("download = 3.0").is_err());
        assert!(ScenarioFile::parse("[rates]\nbase = 0.1").is_err());
    }

    #[test]
    fn test_rates_table_overrides_listed_rates_only() {
        let mut request = AnalysisRequest::default();
        request.schedule.base_rate = 0.25;
        request.schedule.small_business_marginal_rate = 0.10;

        let file = ScenarioFile::parse("[rates]\nper_download_rate = 0.5").unwrap();
        file.apply(&mut request, DEFAULT_TOLERANCE).unwrap();

        assert_eq!(request.schedule.per_download_rate, 0.5);
        assert_eq!(request.schedule.base_rate, 0.25);
        assert_eq!(request.schedule.small_business_marginal_rate, 0.10);
        assert_eq!(request.schedule.standard_marginal_rate, 0.20);
    }

    #[test]
    fn test_answers_accept_any_case_and_booleans() {
        let file = ScenarioFile::parse(
            r#"
            small_business_program = "yes"
            alternate_payment_processing = true
            third_party_store = "FALSE"
            "#,
        )
        .unwrap();

        let mut request = AnalysisRequest::default();
        request.scenario.third_party_store = true;
        file.apply(&mut request, DEFAULT_TOLERANCE).unwrap();

        assert!(request.scenario.small_business_program);
        assert!(request.scenario.alternate_payment_processing);
        assert!(!request.scenario.third_party_store);
        assert!(ScenarioFile::parse(r#"third_party_store = "maybe""#).is_err());
    }

    #[test]
    fn test_strategy_name_keeps_configured_tolerance() {
        let file = ScenarioFile::parse(r#"strategy = "tolerance""#).unwrap();

        let mut bracketing = AnalysisRequest::default();
        file.apply(&mut bracketing, 0.2).unwrap();
        assert_eq!(
            bracketing.strategy,
            IntersectionStrategy::Tolerance { epsilon: 0.2 }
        );

        let mut tolerance = AnalysisRequest {
            strategy: IntersectionStrategy::Tolerance { epsilon: 0.07 },
            ..Default::default()
        };
        file.apply(&mut tolerance, 0.2).unwrap();
        assert_eq!(
            tolerance.strategy,
            IntersectionStrategy::Tolerance { epsilon: 0.07 }
        );
    }

    #[test]
    fn test_bad_strategy_is_rejected() {
        let file = ScenarioFile::parse(r#"strategy = "newton""#).unwrap();
        assert!(
            file.apply(&mut AnalysisRequest::default(), DEFAULT_TOLERANCE)
                .is_err()
        );
    }
}
