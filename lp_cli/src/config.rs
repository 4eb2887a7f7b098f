//! CLI configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.
//! Command-line flags take priority over the environment, which takes priority
//! over defaults.

use league_pairing::swiss::Round1Order;
use std::str::FromStr;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON for the host application
    #[default]
    Json,
    /// Human-readable tables
    Text,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(ConfigError::Invalid {
                var: "LP_OUTPUT".to_string(),
                reason: format!("Expected 'json' or 'text', got '{other}'"),
            }),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--output`
    pub output: Option<OutputFormat>,
    /// `--shuffle-seed`, implies shuffled round-1 order
    pub shuffle_seed: Option<u64>,
    /// `--strict`
    pub strict: bool,
}

/// Complete CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Output format
    pub output: OutputFormat,
    /// Ordering used for Swiss round 1
    pub round1_order: Round1Order,
    /// Validate match history before computing anything
    pub strict: bool,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but invalid, or if shuffled
    /// ordering is requested without a seed
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match overrides.output {
            Some(output) => output,
            None => parse_var(&lookup, "LP_OUTPUT")?.unwrap_or_default(),
        };

        let shuffle_seed = match overrides.shuffle_seed {
            Some(seed) => Some(seed),
            None => parse_var::<u64, _>(&lookup, "LP_SHUFFLE_SEED")?,
        };

        let order = lookup("LP_ROUND1_ORDER").map(|v| v.to_lowercase());
        let round1_order = match (order.as_deref(), shuffle_seed) {
            (None | Some("shuffle"), Some(seed)) => Round1Order::Shuffled { seed },
            (Some("shuffle"), None) => {
                return Err(ConfigError::MissingRequired {
                    var: "LP_SHUFFLE_SEED".to_string(),
                    hint: "Shuffled round-1 order needs a seed, e.g. LP_SHUFFLE_SEED=42"
                        .to_string(),
                });
            }
            (None | Some("name"), None) => Round1Order::Name,
            (Some("name"), Some(_)) if overrides.shuffle_seed.is_none() => Round1Order::Name,
            (Some("name"), Some(seed)) => Round1Order::Shuffled { seed },
            (Some(other), _) => {
                return Err(ConfigError::Invalid {
                    var: "LP_ROUND1_ORDER".to_string(),
                    reason: format!("Expected 'name' or 'shuffle', got '{other}'"),
                });
            }
        };

        let strict = overrides.strict || parse_var(&lookup, "LP_STRICT")?.unwrap_or(false);

        Ok(CliConfig {
            output,
            round1_order,
            strict,
        })
    }
}

/// Configuration error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional variable, rejecting values that do not parse
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("Could not parse '{raw}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)], overrides: CliOverrides) -> Result<CliConfig, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(overrides, |key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[], CliOverrides::default()).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.round1_order, Round1Order::Name);
        assert!(!config.strict);
    }

    #[test]
    fn test_env_values() {
        let config = load(
            &[
                ("LP_OUTPUT", "TEXT"),
                ("LP_ROUND1_ORDER", "shuffle"),
                ("LP_SHUFFLE_SEED", "42"),
                ("LP_STRICT", "true"),
            ],
            CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.round1_order, Round1Order::Shuffled { seed: 42 });
        assert!(config.strict);
    }

    #[test]
    fn test_overrides_win() {
        let overrides = CliOverrides {
            output: Some(OutputFormat::Json),
            shuffle_seed: Some(7),
            strict: true,
        };
        let config = load(
            &[("LP_OUTPUT", "text"), ("LP_ROUND1_ORDER", "name"), ("LP_STRICT", "false")],
            overrides,
        )
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.round1_order, Round1Order::Shuffled { seed: 7 });
        assert!(config.strict);
    }

    #[test]
    fn test_name_order_ignores_env_seed() {
        let config = load(
            &[("LP_ROUND1_ORDER", "name"), ("LP_SHUFFLE_SEED", "9")],
            CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(config.round1_order, Round1Order::Name);
    }

    #[test]
    fn test_shuffle_without_seed() {
        let err = load(&[("LP_ROUND1_ORDER", "shuffle")], CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }

    #[test]
    fn test_invalid_values() {
        for vars in [
            [("LP_OUTPUT", "yaml")],
            [("LP_ROUND1_ORDER", "random")],
            [("LP_SHUFFLE_SEED", "abc")],
            [("LP_STRICT", "maybe")],
        ] {
            let err = load(&vars, CliOverrides::default()).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }), "{vars:?}");
        }
    }
}
