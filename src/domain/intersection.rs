//! Crossing detection between two sampled fee curves.
//!
//! Both curves must be sampled over the same ascending revenue grid. Only the
//! first crossing found from the left is reported.

use crate::domain::errors::ScenarioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// How the scan decides that two curves meet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IntersectionStrategy {
    /// First sample where the curves are within `epsilon` of each other.
    /// Crossings that fall between samples can be missed.
    Tolerance { epsilon: f64 },
    /// First sign change of `current - proposed` between adjacent samples.
    /// Without interpolation the later sample of the bracket is reported.
    Bracketing { interpolate: bool },
}

impl Default for IntersectionStrategy {
    fn default() -> Self {
        IntersectionStrategy::Bracketing { interpolate: true }
    }
}

impl IntersectionStrategy {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if let IntersectionStrategy::Tolerance { epsilon } = *self
            && (!epsilon.is_finite() || epsilon < 0.0)
        {
            return Err(ScenarioError::InvalidTolerance { value: epsilon });
        }
        Ok(())
    }

    /// Tolerance of the tolerance strategy, `None` for bracketing
    pub fn epsilon(&self) -> Option<f64> {
        match self {
            IntersectionStrategy::Tolerance { epsilon } => Some(*epsilon),
            IntersectionStrategy::Bracketing { .. } => None,
        }
    }

    /// Parse a strategy name; a tolerance strategy starts with `epsilon`
    pub fn parse_with_tolerance(name: &str, epsilon: f64) -> anyhow::Result<Self> {
        Ok(Self::from_str(name)?.with_tolerance(epsilon))
    }

    /// Same strategy kind with the given tolerance when it applies
    pub fn with_tolerance(self, epsilon: f64) -> Self {
        match self {
            IntersectionStrategy::Tolerance { .. } => IntersectionStrategy::Tolerance { epsilon },
            other => other,
        }
    }
}

impl fmt::Display for IntersectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntersectionStrategy::Tolerance { epsilon } => write!(f, "tolerance (ε = {})", epsilon),
            IntersectionStrategy::Bracketing { interpolate: true } => {
                f.write_str("bracketing (interpolated)")
            }
            IntersectionStrategy::Bracketing { interpolate: false } => {
                f.write_str("bracketing (sampled)")
            }
        }
    }
}

impl FromStr for IntersectionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tolerance" => Ok(IntersectionStrategy::Tolerance {
                epsilon: DEFAULT_TOLERANCE,
            }),
            "bracketing" | "interpolated" => {
                Ok(IntersectionStrategy::Bracketing { interpolate: true })
            }
            "bracketing-raw" | "sampled" => {
                Ok(IntersectionStrategy::Bracketing { interpolate: false })
            }
            _ => anyhow::bail!(
                "Invalid INTERSECTION_STRATEGY: {}. Must be 'tolerance', 'bracketing' or 'bracketing-raw'",
                s
            ),
        }
    }
}

/// Where the two fee curves meet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionPoint {
    pub revenue: f64,
    pub fee: f64,
}

/// Straight segment used to annotate the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGuide {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl IntersectionPoint {
    /// Vertical drop to the revenue axis, then horizontal run to the fee axis
    pub fn axis_guides(&self) -> [AxisGuide; 2] {
        [
            AxisGuide {
                x0: self.revenue,
                y0: 0.0,
                x1: self.revenue,
                y1: self.fee,
            },
            AxisGuide {
                x0: 0.0,
                y0: self.fee,
                x1: self.revenue,
                y1: self.fee,
            },
        ]
    }
}

/// Scan two sampled curves for their first crossing.
///
/// `current` and `proposed` hold fees at each of `revenues`; extra samples in
/// a longer slice are ignored.
pub fn find_intersection(
    revenues: &[f64],
    current: &[f64],
    proposed: &[f64],
    strategy: IntersectionStrategy,
) -> Option<IntersectionPoint> {
    let samples = revenues
        .iter()
        .zip(current)
        .zip(proposed)
        .map(|((&r, &c), &p)| (r, c, c - p));

    match strategy {
        IntersectionStrategy::Tolerance { epsilon } => tolerance_scan(samples, epsilon),
        IntersectionStrategy::Bracketing { interpolate } => bracketing_scan(samples, interpolate),
    }
}

fn tolerance_scan(
    mut samples: impl Iterator<Item = (f64, f64, f64)>,
    epsilon: f64,
) -> Option<IntersectionPoint> {
    samples
        .find(|&(_, _, gap)| gap.abs() <= epsilon)
        .map(|(revenue, fee, _)| IntersectionPoint { revenue, fee })
}

fn bracketing_scan(
    samples: impl Iterator<Item = (f64, f64, f64)>,
    interpolate: bool,
) -> Option<IntersectionPoint> {
    let mut previous: Option<(f64, f64, f64)> = None;

    for (revenue, fee, gap) in samples {
        if gap == 0.0 {
            return Some(IntersectionPoint { revenue, fee });
        }

        if let Some((prev_revenue, prev_fee, prev_gap)) = previous
            && ((prev_gap < 0.0 && gap > 0.0) || (prev_gap > 0.0 && gap < 0.0))
        {
            if !interpolate {
                return Some(IntersectionPoint { revenue, fee });
            }

            let t = prev_gap / (prev_gap - gap);
            return Some(IntersectionPoint {
                revenue: prev_revenue + (revenue - prev_revenue) * t,
                fee: prev_fee + (fee - prev_fee) * t,
            });
        }

        previous = Some((revenue, fee, gap));
    }

    None
}
