//! Rate table behind both charge models.

use crate::domain::charges::period::BillingPeriod;
use crate::domain::errors::ScenarioError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The rates used by the current and proposed charge models.
///
/// # Invariants
///
/// - Every rate is finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Share of revenue charged by the current model (0.30 = 30%)
    pub base_rate: f64,

    /// Charge per download above the first (in fee units per download unit)
    pub per_download_rate: f64,

    /// Marginal revenue rate of the proposed model
    pub standard_marginal_rate: f64,

    /// Marginal revenue rate under the small business program
    pub small_business_marginal_rate: f64,

    /// Reduction of the marginal rate with alternate payment processing
    pub alternate_payment_discount: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            base_rate: 0.30,
            per_download_rate: 0.543,
            standard_marginal_rate: 0.20,
            small_business_marginal_rate: 0.15,
            alternate_payment_discount: 0.03,
        }
    }
}

/// Scenario answers that select the proposed model's terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Download volume (millions per year)
    pub downloads: f64,
    pub small_business_program: bool,
    pub alternate_payment_processing: bool,
    /// Distribution outside the first-party store: no marginal revenue term
    pub third_party_store: bool,
    pub period: BillingPeriod,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            downloads: 100.0,
            small_business_program: false,
            alternate_payment_processing: false,
            third_party_store: false,
            period: BillingPeriod::Yearly,
        }
    }
}

impl ScenarioParameters {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.downloads.is_finite() || self.downloads < 0.0 {
            return Err(ScenarioError::InvalidDownloads {
                value: self.downloads,
            });
        }
        Ok(())
    }
}

impl FeeSchedule {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let rates = [
            ("base_rate", self.base_rate),
            ("per_download_rate", self.per_download_rate),
            ("standard_marginal_rate", self.standard_marginal_rate),
            (
                "small_business_marginal_rate",
                self.small_business_marginal_rate,
            ),
            (
                "alternate_payment_discount",
                self.alternate_payment_discount,
            ),
        ];

        for (field, value) in rates {
            if !value.is_finite() {
                return Err(ScenarioError::NonFiniteRate {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Marginal revenue rate of the proposed model for a scenario.
    ///
    /// The combined discounts never push the rate below zero.
    pub fn marginal_rate(&self, scenario: &ScenarioParameters) -> f64 {
        let mut rate = if scenario.small_business_program {
            self.small_business_marginal_rate
        } else {
            self.standard_marginal_rate
        };

        if scenario.alternate_payment_processing {
            rate -= self.alternate_payment_discount;
        }

        if rate < 0.0 {
            warn!(
                "Marginal rate {:.4} is negative for this scenario, clamping to 0",
                rate
            );
            return 0.0;
        }
        rate
    }
}
