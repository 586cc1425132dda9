//! Dashboard window configuration parsing from environment variables.

use std::env;

/// Display environment configuration
#[derive(Debug, Clone)]
pub struct DisplayEnvConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub chart_height: f32,
}

impl Default for DisplayEnvConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 700.0,
            chart_height: 700.0,
        }
    }
}

impl DisplayEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            window_width: env::var("WINDOW_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.window_width),
            window_height: env::var("WINDOW_HEIGHT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.window_height),
            chart_height: env::var("CHART_HEIGHT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.chart_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_defaults() {
        let config = DisplayEnvConfig::from_env();
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 700.0);
        assert_eq!(config.chart_height, 700.0);
    }
}
