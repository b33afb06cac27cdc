//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::validation::validate_tax_rate;

use super::types::{CalculatorConfig, InputDefaults, ServerConfig};

/// Loads and provides access to the calculator configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── server.yaml    # Service name and bind address
/// └── defaults.yaml  # Request defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Default tax rate: {}%", loader.defaults().tax_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The default tax rate is outside `[0, 100)`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let server_path = path.join("server.yaml");
        let server = Self::load_yaml::<ServerConfig>(&server_path)?;

        let defaults_path = path.join("defaults.yaml");
        let defaults = Self::load_yaml::<InputDefaults>(&defaults_path)?;
        validate_tax_rate(defaults.tax_rate).map_err(|e| EngineError::ConfigParseError {
            path: defaults_path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::new(CalculatorConfig::new(server, defaults)))
    }

    /// Wraps an already-built configuration.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Replaces the configured bind address.
    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        let server = ServerConfig {
            bind_address: bind_address.into(),
            ..self.config.server().clone()
        };
        self.config = CalculatorConfig::new(server, self.config.defaults().clone());
        self
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns the request defaults.
    pub fn defaults(&self) -> &InputDefaults {
        self.config.defaults()
    }
}
