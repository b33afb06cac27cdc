//! Core data models for the Salary Conversion Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod currency;
mod period;
mod salary_input;
mod salary_result;

pub use currency::{Currency, EUR_TO_USD_RATE};
pub use period::{HOURS_IN_DAY, HOURS_IN_MONTH, HOURS_IN_WEEK, HOURS_IN_YEAR, Period};
pub use salary_input::{SalaryInput, SalaryType};
pub use salary_result::{CurrencyRates, PeriodAmounts, SalaryRates, SalaryResult};
