use crate::domain::charges::period::BillingPeriod;
use crate::domain::charges::schedule::{FeeSchedule, ScenarioParameters};
use std::fmt::Debug;

pub trait ChargeModel: Debug + Send + Sync {
    /// Fee charged for a given revenue
    fn fee(&self, revenue: f64) -> f64;

    /// Get description of the charge model
    fn description(&self) -> String;

    /// Evaluate the model over every revenue in order
    fn fees(&self, revenues: &[f64]) -> Vec<f64> {
        revenues.iter().map(|&r| self.fee(r)).collect()
    }
}

/// Fixed share of revenue
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentModel {
    pub base_rate: f64,
    pub period: BillingPeriod,
}

impl CurrentModel {
    pub fn new(base_rate: f64, period: BillingPeriod) -> Self {
        Self { base_rate, period }
    }

    pub fn from_schedule(schedule: &FeeSchedule, period: BillingPeriod) -> Self {
        Self::new(schedule.base_rate, period)
    }
}

impl ChargeModel for CurrentModel {
    fn fee(&self, revenue: f64) -> f64 {
        self.period.scale(revenue * self.base_rate)
    }

    fn description(&self) -> String {
        format!("Current Model (f(r)): {:.1}% of revenue", self.base_rate * 100.0)
    }
}

/// Per-download charge plus an optional marginal share of revenue.
///
/// Without the marginal term the fee depends on downloads only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposedModel {
    pub downloads: f64,
    pub per_download_rate: f64,
    pub marginal_rate: Option<f64>,
    pub period: BillingPeriod,
}

impl ProposedModel {
    pub fn new(
        downloads: f64,
        per_download_rate: f64,
        marginal_rate: Option<f64>,
        period: BillingPeriod,
    ) -> Self {
        Self {
            downloads,
            per_download_rate,
            marginal_rate,
            period,
        }
    }

    pub fn from_scenario(schedule: &FeeSchedule, scenario: &ScenarioParameters) -> Self {
        let marginal_rate = if scenario.third_party_store {
            None
        } else {
            Some(schedule.marginal_rate(scenario))
        };

        Self::new(
            scenario.downloads,
            schedule.per_download_rate,
            marginal_rate,
            scenario.period,
        )
    }

    /// The part of the fee that does not depend on revenue
    pub fn download_charge(&self) -> f64 {
        (self.downloads - 1.0) * self.per_download_rate
    }
}

impl ChargeModel for ProposedModel {
    fn fee(&self, revenue: f64) -> f64 {
        let yearly = match self.marginal_rate {
            Some(rate) => self.download_charge() + revenue * rate,
            None => self.download_charge(),
        };
        self.period.scale(yearly)
    }

    fn description(&self) -> String {
        match self.marginal_rate {
            Some(rate) => format!(
                "Proposed Model (f(r, d)) with downloads={} Million/{}, marginal rate {:.1}%",
                self.downloads,
                self.period.label().trim_end_matches("ly"),
                rate * 100.0
            ),
            None => format!(
                "Proposed Model (f(d)) with downloads={} Million/{}, third-party store",
                self.downloads,
                self.period.label().trim_end_matches("ly"),
            ),
        }
    }
}

/// Fee as a share of revenue, 0 when revenue is 0
pub fn safe_ratio(fee: f64, revenue: f64) -> f64 {
    if revenue == 0.0 { 0.0 } else { fee / revenue }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_model_is_exact_share() {
        let model = CurrentModel::from_schedule(&FeeSchedule::default(), BillingPeriod::Yearly);

        for r in [0.0, 1.0, 135.75, 537.57, 1000.0] {
            assert_eq!(model.fee(r), 0.3 * r);
        }
    }

    #[test]
    fn test_current_model_monthly() {
        let model = CurrentModel::new(0.3, BillingPeriod::Monthly);
        assert_eq!(model.fee(120.0), 0.3 * 120.0 / 12.0);
        assert_eq!(model.fee(0.0), 0.0);
    }

    #[test]
    fn test_proposed_model_formula() {
        let schedule = FeeSchedule::default();
        let scenario = ScenarioParameters::default();
        let model = ProposedModel::from_scenario(&schedule, &scenario);

        for r in [0.0, 10.0, 537.57, 1000.0] {
            assert_eq!(model.fee(r), (100.0 - 1.0) * 0.543 + r * 0.2);
        }
    }

    #[test]
    fn test_proposed_model_third_party_is_flat() {
        let schedule = FeeSchedule::default();
        let scenario = ScenarioParameters {
            downloads: 50.0,
            third_party_store: true,
            ..Default::default()
        };
        let model = ProposedModel::from_scenario(&schedule, &scenario);

        let expected = (50.0 - 1.0) * 0.543;
        assert_eq!(model.fee(0.0), expected);
        assert_eq!(model.fee(999.0), expected);
        assert!(model.description().contains("third-party"));
    }

    #[test]
    fn test_proposed_model_at_zero_revenue() {
        let model = ProposedModel::new(11.0, 0.5, Some(0.2), BillingPeriod::Yearly);
        assert_eq!(model.fee(0.0), 5.0);
    }

    #[test]
    fn test_fees_keeps_order_and_length() {
        let model = CurrentModel::new(0.5, BillingPeriod::Yearly);
        assert_eq!(model.fees(&[0.0, 2.0, 4.0]), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_safe_ratio_zero_revenue() {
        assert_eq!(safe_ratio(0.0, 0.0), 0.0);
        assert_eq!(safe_ratio(53.757, 0.0), 0.0);
        assert_eq!(safe_ratio(-4.0, 0.0), 0.0);
        assert_eq!(safe_ratio(30.0, 100.0), 0.3);
    }

    #[test]
    fn test_description_mentions_period() {
        let model = ProposedModel::new(100.0, 0.543, Some(0.2), BillingPeriod::Monthly);
        assert!(model.description().contains("Million/Month"));
    }
}
