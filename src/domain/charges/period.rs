use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Framing of the fee amounts shown on the chart.
///
/// Revenue and download volume are always yearly figures; the period only
/// scales the resulting charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Yearly,
    Monthly,
}

impl BillingPeriod {
    /// Converts a yearly charge into this period's framing
    pub fn scale(&self, yearly_amount: f64) -> f64 {
        match self {
            BillingPeriod::Yearly => yearly_amount,
            BillingPeriod::Monthly => yearly_amount / 12.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Yearly => "Yearly",
            BillingPeriod::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillingPeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yearly" | "year" | "annual" => Ok(BillingPeriod::Yearly),
            "monthly" | "month" => Ok(BillingPeriod::Monthly),
            _ => anyhow::bail!(
                "Invalid BILLING_PERIOD: {}. Must be 'yearly' or 'monthly'",
                s
            ),
        }
    }
}

/// A "Yes"/"No" answer as collected by the scenario selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => f.write_str("Yes"),
            YesNo::No => f.write_str("No"),
        }
    }
}

impl FromStr for YesNo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(YesNo::Yes),
            "no" | "n" | "false" => Ok(YesNo::No),
            _ => anyhow::bail!("Invalid answer: {}. Must be 'Yes' or 'No'", s),
        }
    }
}

/// Accepts a boolean or any string `FromStr` understands
impl<'de> Deserialize<'de> for YesNo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Answer {
            Flag(bool),
            Text(String),
        }

        match Answer::deserialize(deserializer)? {
            Answer::Flag(flag) => Ok(flag.into()),
            Answer::Text(text) => YesNo::from_str(&text).map_err(serde::de::Error::custom),
        }
    }
}
