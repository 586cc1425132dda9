//! One compute pass: sample both charge models, locate the crossing and
//! assemble everything a chart needs.

use crate::domain::charges::{
    BillingPeriod, CurrentModel, FeeSchedule, ProposedModel, ScenarioParameters,
};
use crate::domain::errors::ScenarioError;
use crate::domain::intersection::{
    AxisGuide, IntersectionPoint, IntersectionStrategy, find_intersection,
};
use crate::domain::sampling::RevenueDomain;
use crate::domain::series::FeeSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a single analysis pass depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub scenario: ScenarioParameters,
    pub schedule: FeeSchedule,
    pub max_revenue: f64,
    pub sample_count: usize,
    pub strategy: IntersectionStrategy,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            scenario: ScenarioParameters::default(),
            schedule: FeeSchedule::default(),
            max_revenue: 1000.0,
            sample_count: 10_000,
            strategy: IntersectionStrategy::default(),
        }
    }
}

/// Title and axis labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl ChartMetadata {
    pub fn for_period(period: BillingPeriod) -> Self {
        Self {
            title: format!("Current vs. Proposed {} Service Charges", period),
            x_axis: "App Provider's Yearly Revenue ($ Million)".to_string(),
            y_axis: format!("{} Service Charges ($ Million)", period),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheaperModel {
    Current,
    Proposed,
    Equal,
}

impl CheaperModel {
    fn from_gap(gap: f64) -> Self {
        if gap < 0.0 {
            CheaperModel::Current
        } else if gap > 0.0 {
            CheaperModel::Proposed
        } else {
            CheaperModel::Equal
        }
    }
}

/// Which schedule charges less at each end of the revenue domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenSummary {
    pub at_zero_revenue: CheaperModel,
    pub at_max_revenue: CheaperModel,
}

/// Output of one pass, handed to a rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ChartMetadata,
    pub scenario: ScenarioParameters,
    pub marginal_rate: Option<f64>,
    pub strategy: IntersectionStrategy,
    pub current: FeeSeries,
    pub proposed: FeeSeries,
    pub intersection: Option<IntersectionPoint>,
    pub guides: Vec<AxisGuide>,
    pub break_even: BreakEvenSummary,
}

impl AnalysisReport {
    /// Keep every `stride`-th sample of both series, plus the last one
    pub fn with_sample_stride(mut self, stride: usize) -> Self {
        if stride > 1 {
            thin(&mut self.current, stride);
            thin(&mut self.proposed, stride);
        }
        self
    }
}

fn thin(series: &mut FeeSeries, stride: usize) {
    let last = series.samples.len().saturating_sub(1);
    let mut idx = 0;
    series.samples.retain(|_| {
        let keep = idx % stride == 0 || idx == last;
        idx += 1;
        keep
    });
}

/// Stateless analysis service
pub struct ChargeAnalysis;

impl ChargeAnalysis {
    pub fn run(request: &AnalysisRequest) -> Result<AnalysisReport, ScenarioError> {
        request.scenario.validate()?;
        request.schedule.validate()?;
        request.strategy.validate()?;
        let domain = RevenueDomain::new(request.max_revenue, request.sample_count)?;

        let current_model = CurrentModel::from_schedule(&request.schedule, request.scenario.period);
        let proposed_model = ProposedModel::from_scenario(&request.schedule, &request.scenario);

        let current = FeeSeries::sample(&current_model, domain.samples());
        let proposed = FeeSeries::sample(&proposed_model, domain.samples());

        let intersection = find_intersection(
            domain.samples(),
            &current.fees(),
            &proposed.fees(),
            request.strategy,
        );

        match &intersection {
            Some(point) => debug!(
                "Curves cross at revenue {:.4}, fee {:.4} ({})",
                point.revenue, point.fee, request.strategy
            ),
            None => debug!(
                "No crossing in [0, {}] over {} samples ({})",
                domain.max_revenue(),
                domain.len(),
                request.strategy
            ),
        }

        let guides = intersection
            .map(|point| point.axis_guides().to_vec())
            .unwrap_or_default();

        let gap_at = |idx: usize| current.samples[idx].fee - proposed.samples[idx].fee;
        let break_even = BreakEvenSummary {
            at_zero_revenue: CheaperModel::from_gap(gap_at(0)),
            at_max_revenue: CheaperModel::from_gap(gap_at(domain.len() - 1)),
        };

        Ok(AnalysisReport {
            metadata: ChartMetadata::for_period(request.scenario.period),
            scenario: request.scenario,
            marginal_rate: proposed_model.marginal_rate,
            strategy: request.strategy,
            current,
            proposed,
            intersection,
            guides,
            break_even,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_crossing() {
        let report = ChargeAnalysis::run(&AnalysisRequest::default()).unwrap();

        let point = report.intersection.expect("default curves cross");
        assert!((point.revenue - 537.57).abs() < 1e-6);
        assert!((point.fee - 161.271).abs() < 1e-6);
        assert_eq!(report.guides.len(), 2);
        assert_eq!(report.current.samples.len(), 10_000);
        assert_eq!(report.marginal_rate, Some(0.20));
        assert_eq!(
            report.break_even,
            BreakEvenSummary {
                at_zero_revenue: CheaperModel::Current,
                at_max_revenue: CheaperModel::Proposed,
            }
        );
    }

    #[test]
    fn test_no_crossing_has_no_guides() {
        let request = AnalysisRequest {
            scenario: ScenarioParameters {
                downloads: 10_000.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let report = ChargeAnalysis::run(&request).unwrap();

        assert!(report.intersection.is_none());
        assert!(report.guides.is_empty());
        assert_eq!(report.break_even.at_max_revenue, CheaperModel::Current);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let request = AnalysisRequest {
            max_revenue: 0.0,
            ..Default::default()
        };
        assert_eq!(
            ChargeAnalysis::run(&request),
            Err(ScenarioError::InvalidMaxRevenue { value: 0.0 })
        );

        let request = AnalysisRequest {
            scenario: ScenarioParameters {
                downloads: -3.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(ChargeAnalysis::run(&request).is_err());
    }

    #[test]
    fn test_metadata_follows_period() {
        let monthly = ChartMetadata::for_period(BillingPeriod::Monthly);
        assert_eq!(monthly.title, "Current vs. Proposed Monthly Service Charges");
        assert!(monthly.y_axis.starts_with("Monthly"));
        assert!(monthly.x_axis.contains("Yearly Revenue"));
    }

    #[test]
    fn test_sample_stride_keeps_endpoints() {
        let request = AnalysisRequest {
            sample_count: 11,
            ..Default::default()
        };
        let report = ChargeAnalysis::run(&request).unwrap().with_sample_stride(4);

        let revenues: Vec<f64> = report.current.samples.iter().map(|s| s.revenue).collect();
        assert_eq!(revenues, vec![0.0, 400.0, 800.0, 1000.0]);
        assert_eq!(report.proposed.samples.len(), 4);
    }
}
