//! Configuration types for the salary calculator service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Hour factors and the
//! exchange rate are compiled constants and deliberately absent here.

use serde::Deserialize;

use crate::models::{Currency, Period, SalaryType};

/// HTTP service settings from `server.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The service name reported in logs.
    pub name: String,
    /// The socket address the service binds to (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

/// Request defaults from `defaults.yaml`.
///
/// These fill request fields the client omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDefaults {
    /// Currency used when the request has none.
    pub currency: Currency,
    /// Period used when the request has none.
    pub period: Period,
    /// Salary type used when the request has none.
    #[serde(rename = "type")]
    pub salary_type: SalaryType,
    /// Tax rate in percent used when the request has none.
    pub tax_rate: f64,
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    server: ServerConfig,
    defaults: InputDefaults,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(server: ServerConfig, defaults: InputDefaults) -> Self {
        Self { server, defaults }
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the request defaults.
    pub fn defaults(&self) -> &InputDefaults {
        &self.defaults
    }
}
