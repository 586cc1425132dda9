use crate::domain::errors::ScenarioError;

/// Evenly spaced revenue samples over `[0, max_revenue]`.
///
/// # Invariants
///
/// - Strictly increasing
/// - First sample is exactly 0 and last sample is exactly `max_revenue`
/// - Between 2 and `MAX_SAMPLES` samples
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueDomain {
    max_revenue: f64,
    samples: Vec<f64>,
}

impl RevenueDomain {
    pub const MIN_SAMPLES: usize = 2;
    pub const MAX_SAMPLES: usize = 1_000_000;

    pub fn new(max_revenue: f64, sample_count: usize) -> Result<Self, ScenarioError> {
        if !max_revenue.is_finite() || max_revenue < 1.0 {
            return Err(ScenarioError::InvalidMaxRevenue { value: max_revenue });
        }
        if !(Self::MIN_SAMPLES..=Self::MAX_SAMPLES).contains(&sample_count) {
            return Err(ScenarioError::InvalidSampleCount {
                value: sample_count,
            });
        }

        // The fraction stays in [0, 1] so large bounds cannot overflow
        let last = (sample_count - 1) as f64;
        let samples = (0..sample_count)
            .map(|i| max_revenue * (i as f64 / last))
            .collect();

        Ok(Self {
            max_revenue,
            samples,
        })
    }

    pub fn max_revenue(&self) -> f64 {
        self.max_revenue
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
