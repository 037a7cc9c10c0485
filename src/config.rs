//! Configuration module for eventforge
//!
//! This module handles loading configuration from environment variables,
//! providing a strongly-typed configuration structure for the demo binary.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure for eventforge
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config::init_from_env()?)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(environment: &str) -> Config {
        let mut vars = HashMap::new();
        vars.insert("ENVIRONMENT".to_string(), environment.to_string());
        Config::init_from_hashmap(&vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::init_from_hashmap(&HashMap::new()).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_environment_helpers() {
        assert!(config_with("development").is_development());
        assert!(!config_with("development").is_production());
        assert!(config_with("production").is_production());
        assert!(!config_with("staging").is_development());
    }
}
