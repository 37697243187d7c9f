//! Generator configuration
//!
//! Loaded from JSON; every field is optional and falls back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DMAXX, DMAXY, MAX_ATTEMPTS, MIN_AREA, STAIRS_EXCLUSION_RADIUS};
use crate::error::ConfigError;

/// Tunables for procedural generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Minimum occupied mega tiles for a layout to be accepted
    pub min_area: usize,
    /// Partition attempts before reporting exhaustion
    pub max_attempts: u32,
    /// Radius (world cells) kept clear of stairs down around stairs up
    pub stairs_exclusion_radius: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_area: MIN_AREA,
            max_attempts: MAX_ATTEMPTS,
            stairs_exclusion_radius: STAIRS_EXCLUSION_RADIUS,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn parse_config(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can never produce a level
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_area > DMAXX * DMAXY {
            return Err(ConfigError::Invalid(format!(
                "min_area {} exceeds the {} tile map",
                self.min_area,
                DMAXX * DMAXY
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".to_string()));
        }
        if self.stairs_exclusion_radius < 0 {
            return Err(ConfigError::Invalid(format!(
                "stairs_exclusion_radius {} is negative",
                self.stairs_exclusion_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_area, 650);
        assert_eq!(config.max_attempts, 10_000);
        assert_eq!(config.stairs_exclusion_radius, 30);
    }

    #[test]
    fn test_parse_partial() {
        let config = GeneratorConfig::parse_config(r#"{ "max_attempts": 25 }"#).unwrap();
        assert_eq!(config.max_attempts, 25);
        assert_eq!(config.min_area, 650);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(matches!(
            GeneratorConfig::parse_config(r#"{ "max_attempts": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GeneratorConfig::parse_config(r#"{ "min_area": 5000 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GeneratorConfig::parse_config("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
