//! Runtime configuration for the simulation driver
//!
//! Only the driver is configurable: tick period, randomness and the initial
//! selections. Model coefficients live in `simulation::constants` and are
//! fixed.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::types::Language;
use crate::simulation::Stimulus;

/// Default timer period between ticks
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 600;

/// Configuration for a simulation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Milliseconds between timer ticks while running
    ///
    /// Purely a pacing concern. The model advances one tick per timer
    /// event regardless of the period.
    pub tick_interval_ms: u64,

    /// Seed for the noise generator
    ///
    /// `None` seeds from OS entropy, so every run differs.
    pub seed: Option<u64>,

    /// Stimulus selected when the session starts
    pub stimulus: Stimulus,

    /// Language of diagnostic reports and labels
    pub language: Language,

    /// Start ticking immediately instead of waiting for a run command
    pub start_running: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            stimulus: Stimulus::Normal,
            language: Language::English,
            start_running: false,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig(
                "tick_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(600));
        assert_eq!(config.stimulus, Stimulus::Normal);
        assert!(!config.start_running);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            seed = 42
            stimulus = "cold"
            language = "zh"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.stimulus, Stimulus::Cold);
        assert_eq!(config.language, Language::Chinese);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = EngineConfig::from_toml_str("tick_interval_ms = 0");
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_stimulus_is_parse_error() {
        let result = EngineConfig::from_toml_str(r#"stimulus = "windy""#);
        assert!(matches!(result, Err(EngineError::ConfigParse(_))));
    }
}
