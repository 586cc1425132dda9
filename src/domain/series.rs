use crate::domain::charges::{ChargeModel, safe_ratio};
use serde::{Deserialize, Serialize};

/// One sampled point of a fee curve, ready for a hover tooltip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSample {
    pub revenue: f64,
    pub fee: f64,
    pub fee_ratio: f64,
    pub annotation: String,
}

impl FeeSample {
    pub fn new(revenue: f64, fee: f64) -> Self {
        let fee_ratio = safe_ratio(fee, revenue);
        Self {
            revenue,
            fee,
            fee_ratio,
            annotation: annotation(revenue, fee, fee_ratio),
        }
    }
}

/// Hover text shown for a sample
pub fn annotation(revenue: f64, fee: f64, fee_ratio: f64) -> String {
    format!(
        "Revenue: ${:.2} M, Service Fee: ${:.2} M, Fee Ratio: {:.2}%",
        revenue,
        fee,
        fee_ratio * 100.0
    )
}

/// A named curve sampled over the revenue domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSeries {
    pub name: String,
    pub samples: Vec<FeeSample>,
}

impl FeeSeries {
    pub fn sample(model: &dyn ChargeModel, revenues: &[f64]) -> Self {
        let samples = revenues
            .iter()
            .map(|&revenue| FeeSample::new(revenue, model.fee(revenue)))
            .collect();

        Self {
            name: model.description(),
            samples,
        }
    }

    pub fn fees(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.fee).collect()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(|s| [s.revenue, s.fee]).collect()
    }

    /// Sample closest to a revenue value
    pub fn nearest(&self, revenue: f64) -> Option<&FeeSample> {
        let idx = self
            .samples
            .partition_point(|s| s.revenue < revenue)
            .min(self.samples.len().checked_sub(1)?);

        if idx > 0 {
            let below = &self.samples[idx - 1];
            let above = &self.samples[idx];
            if (revenue - below.revenue).abs() <= (above.revenue - revenue).abs() {
                return Some(below);
            }
        }
        self.samples.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charges::{BillingPeriod, CurrentModel};

    #[test]
    fn test_annotation_format() {
        let sample = FeeSample::new(500.0, 150.0);
        assert_eq!(
            sample.annotation,
            "Revenue: $500.00 M, Service Fee: $150.00 M, Fee Ratio: 30.00%"
        );
    }

    #[test]
    fn test_zero_revenue_ratio_is_zero() {
        let sample = FeeSample::new(0.0, 53.757);
        assert_eq!(sample.fee_ratio, 0.0);
        assert!(sample.annotation.ends_with("Fee Ratio: 0.00%"));
    }

    #[test]
    fn test_series_sampling() {
        let model = CurrentModel::new(0.5, BillingPeriod::Yearly);
        let series = FeeSeries::sample(&model, &[0.0, 10.0, 20.0]);

        assert_eq!(series.samples.len(), 3);
        assert_eq!(series.fees(), vec![0.0, 5.0, 10.0]);
        assert_eq!(series.points()[2], [20.0, 10.0]);
        assert!(series.name.starts_with("Current Model"));
    }

    #[test]
    fn test_nearest_sample() {
        let model = CurrentModel::new(0.3, BillingPeriod::Yearly);
        let series = FeeSeries::sample(&model, &[0.0, 10.0, 20.0]);

        assert_eq!(series.nearest(-5.0).unwrap().revenue, 0.0);
        assert_eq!(series.nearest(4.0).unwrap().revenue, 0.0);
        assert_eq!(series.nearest(6.0).unwrap().revenue, 10.0);
        assert_eq!(series.nearest(99.0).unwrap().revenue, 20.0);

        let empty = FeeSeries {
            name: String::new(),
            samples: Vec::new(),
        };
        assert!(empty.nearest(1.0).is_none());
    }
}
