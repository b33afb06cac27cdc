//! Request types for the salary calculator API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Every field is optional on the wire; missing fields are filled
//! from the configured [`InputDefaults`].

use serde::{Deserialize, Serialize};

use crate::config::InputDefaults;
use crate::models::{Currency, Period, SalaryInput, SalaryType};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The salary amount. Never defaulted; absent means zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// The currency the amount is quoted in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// The period the amount is quoted for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Whether the amount is gross or net.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub salary_type: Option<SalaryType>,
    /// The tax rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    /// The minimum acceptable raise in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_raise: Option<f64>,
    /// The comfortable raise in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfortable_raise: Option<f64>,
}

impl CalculationRequest {
    /// Builds the engine input, taking omitted fields from `defaults`.
    pub fn into_input(self, defaults: &InputDefaults) -> SalaryInput {
        SalaryInput {
            amount: self.amount,
            currency: self.currency.unwrap_or(defaults.currency),
            period: self.period.unwrap_or(defaults.period),
            salary_type: self.salary_type.unwrap_or(defaults.salary_type),
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
            min_raise: self.min_raise,
            comfortable_raise: self.comfortable_raise,
        }
    }
}
