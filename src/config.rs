//! Analysis configuration and defaults.

use serde::{Deserialize, Serialize};

/// Column holding the lookup key.
pub const DEFAULT_KEY_COLUMN: &str = "date_value";

/// Column holding the numeric samples.
pub const DEFAULT_VALUE_COLUMN: &str = "r2_rolling";

/// Points on the density grid.
pub const DEFAULT_GRID_POINTS: usize = 200;

/// The grid spans this many standard deviations on each side of the mean.
pub const DEFAULT_SIGMA_SPAN: f64 = 4.0;

// Environment overrides
pub const ENV_KEY_COLUMN: &str = "R2PDF_KEY_COLUMN";
pub const ENV_VALUE_COLUMN: &str = "R2PDF_VALUE_COLUMN";
pub const ENV_GRID_POINTS: &str = "R2PDF_GRID_POINTS";
pub const ENV_SIGMA_SPAN: &str = "R2PDF_SIGMA_SPAN";

/// Knobs of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub key_column: String,
    pub value_column: String,
    pub grid_points: usize,
    pub sigma_span: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            grid_points: DEFAULT_GRID_POINTS,
            sigma_span: DEFAULT_SIGMA_SPAN,
        }
    }
}

impl AnalysisConfig {
    /// Defaults overridden by the `R2PDF_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns. Invalid values are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(col) = lookup(ENV_KEY_COLUMN).filter(|c| !c.trim().is_empty()) {
            config.key_column = col.trim().to_string();
        }
        if let Some(col) = lookup(ENV_VALUE_COLUMN).filter(|c| !c.trim().is_empty()) {
            config.value_column = col.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_GRID_POINTS) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n >= 2 => config.grid_points = n,
                _ => log::warn!("Ignoring {ENV_GRID_POINTS}={raw:?}: expected an integer >= 2"),
            }
        }
        if let Some(raw) = lookup(ENV_SIGMA_SPAN) {
            match raw.trim().parse::<f64>() {
                Ok(s) if s.is_finite() && s > 0.0 => config.sigma_span = s,
                _ => log::warn!("Ignoring {ENV_SIGMA_SPAN}={raw:?}: expected a positive number"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = AnalysisConfig::from_lookup(|_| None);
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.key_column, "date_value");
        assert_eq!(config.value_column, "r2_rolling");
        assert_eq!(config.grid_points, 200);
        assert_eq!(config.sigma_span, 4.0);
    }

    #[test]
    fn valid_overrides_apply() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            (ENV_KEY_COLUMN, "day"),
            (ENV_VALUE_COLUMN, "score"),
            (ENV_GRID_POINTS, "50"),
            (ENV_SIGMA_SPAN, "3"),
        ]));
        assert_eq!(config.key_column, "day");
        assert_eq!(config.value_column, "score");
        assert_eq!(config.grid_points, 50);
        assert_eq!(config.sigma_span, 3.0);
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let config = AnalysisConfig::from_lookup(lookup_from(&[
            (ENV_KEY_COLUMN, "   "),
            (ENV_GRID_POINTS, "1"),
            (ENV_SIGMA_SPAN, "-2"),
        ]));
        assert_eq!(config, AnalysisConfig::default());
    }
}
