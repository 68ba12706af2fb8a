//! Duplicate-check configuration from environment variables.

use std::env;
use thiserror::Error;

use crate::similarity::SIMILAR_THRESHOLD;

/// Default cap on existing recipes compared per duplicate check.
pub const DEFAULT_MAX_CANDIDATES: usize = 1000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    InvalidEnvVar { name: String, value: String },
}

/// Duplicate-check configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateCheckConfig {
    /// Most existing recipes compared against one candidate.
    pub max_candidates: usize,
    /// Default minimum overall score when listing similar recipes.
    pub similar_threshold: f64,
}

impl Default for DuplicateCheckConfig {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            similar_threshold: SIMILAR_THRESHOLD,
        }
    }
}

impl DuplicateCheckConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `MISE_MAX_CANDIDATES`: recipes compared per check (default: 1000)
    /// - `MISE_SIMILAR_THRESHOLD`: listing threshold in `[0, 1]` (default: 0.60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_candidates = match lookup("MISE_MAX_CANDIDATES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| invalid("MISE_MAX_CANDIDATES", &v))?,
            None => defaults.max_candidates,
        };

        let similar_threshold = match lookup("MISE_SIMILAR_THRESHOLD") {
            Some(v) => v
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|t| (0.0..=1.0).contains(t))
                .ok_or_else(|| invalid("MISE_SIMILAR_THRESHOLD", &v))?,
            None => defaults.similar_threshold,
        };

        Ok(Self {
            max_candidates,
            similar_threshold,
        })
    }
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DuplicateCheckConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DuplicateCheckConfig::default());
        assert_eq!(config.max_candidates, 1000);
        assert_eq!(config.similar_threshold, 0.60);
    }

    #[test]
    fn test_overrides() {
        let config = DuplicateCheckConfig::from_lookup(lookup(&[
            ("MISE_MAX_CANDIDATES", "250"),
            ("MISE_SIMILAR_THRESHOLD", "0.7"),
        ]))
        .unwrap();
        assert_eq!(config.max_candidates, 250);
        assert_eq!(config.similar_threshold, 0.7);
    }

    #[test]
    fn test_invalid_values() {
        for (name, value) in [
            ("MISE_MAX_CANDIDATES", "lots"),
            ("MISE_MAX_CANDIDATES", "0"),
            ("MISE_SIMILAR_THRESHOLD", "1.5"),
            ("MISE_SIMILAR_THRESHOLD", "NaN"),
        ] {
            let err = DuplicateCheckConfig::from_lookup(lookup(&[(name, value)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            );
        }
    }
}
