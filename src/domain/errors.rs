use thiserror::Error;

/// Errors raised while validating the inputs of an analysis pass
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("Invalid download volume: {value}. Must be a finite number >= 0")]
    InvalidDownloads { value: f64 },

    #[error("Invalid revenue bound: {value}. Must be a finite number >= 1")]
    InvalidMaxRevenue { value: f64 },

    #[error("Invalid sample count: {value}. Must be between 2 and 1000000")]
    InvalidSampleCount { value: usize },

    #[error("Invalid intersection tolerance: {value}. Must be a finite number >= 0")]
    InvalidTolerance { value: f64 },

    #[error("Rate {field} is not finite: {value}")]
    NonFiniteRate { field: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_error_formatting() {
        let error = ScenarioError::InvalidMaxRevenue { value: 0.5 };

        let msg = error.to_string();
        assert!(msg.contains("0.5"));
        assert!(msg.contains(">= 1"));
    }

    #[test]
    fn test_rate_error_names_field() {
        let error = ScenarioError::NonFiniteRate {
            field: "base_rate".to_string(),
            value: f64::NAN,
        };

        assert!(error.to_string().contains("base_rate"));
    }

    #[test]
    fn test_sample_count_error_names_bounds() {
        let msg = ScenarioError::InvalidSampleCount { value: 0 }.to_string();
        assert!(msg.contains("between 2 and 1000000"));
    }
}
