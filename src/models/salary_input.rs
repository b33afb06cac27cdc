//! Salary input model.
//!
//! This module defines the [`SalaryInput`] record the engine consumes and the
//! [`SalaryType`] that says how its amount should be read.

use serde::{Deserialize, Serialize};

use super::{Currency, Period};

/// Whether an amount is quoted before or after tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Before tax.
    Gross,
    /// After tax.
    Net,
}

/// A salary as entered by the caller.
///
/// The engine trusts the shape of this record but not its numeric ranges;
/// see [`crate::validation::validate_input`] for the range checks callers
/// are expected to run first.
///
/// # Example
///
/// ```
/// use salary_calculator::models::{Currency, Period, SalaryInput, SalaryType};
///
/// let input = SalaryInput::new(Some(5000.0), Currency::Eur, Period::Month, SalaryType::Net, 20.0)
///     .with_min_raise(10.0);
/// assert_eq!(input.min_raise, Some(10.0));
/// assert_eq!(input.comfortable_raise, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// The salary amount. Absent means zero.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The currency the amount is quoted in.
    pub currency: Currency,
    /// The period the amount is quoted for.
    pub period: Period,
    /// Whether the amount is gross or net.
    #[serde(rename = "type")]
    pub salary_type: SalaryType,
    /// The tax rate in percent (20.0 means 20%).
    pub tax_rate: f64,
    /// The minimum acceptable raise in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_raise: Option<f64>,
    /// The comfortable raise in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfortable_raise: Option<f64>,
}

impl SalaryInput {
    /// Creates an input with no raise scenarios.
    pub fn new(
        amount: Option<f64>,
        currency: Currency,
        period: Period,
        salary_type: SalaryType,
        tax_rate: f64,
    ) -> Self {
        Self {
            amount,
            currency,
            period,
            salary_type,
            tax_rate,
            min_raise: None,
            comfortable_raise: None,
        }
    }

    /// Requests a minimum raise scenario.
    pub fn with_min_raise(mut self, percent: f64) -> Self {
        self.min_raise = Some(percent);
        self
    }

    /// Requests a comfortable raise scenario.
    pub fn with_comfortable_raise(mut self, percent: f64) -> Self {
        self.comfortable_raise = Some(percent);
        self
    }

    /// Returns the amount, reading an absent or NaN amount as zero.
    pub fn amount_or_zero(&self) -> f64 {
        match self.amount {
            Some(amount) if !amount.is_nan() => amount,
            _ => 0.0,
        }
    }
}
