//! Calculation logic for the Salary Conversion Engine.
//!
//! The pipeline runs in four stages: currency normalization to EUR, period
//! normalization to an hourly rate, tax-direction resolution into a net and
//! gross pair, and expansion of that pair into every currency and period.
//! Raise scenarios reuse the expansion stage on a scaled pair.

mod currency_normalization;
mod expansion;
mod period_normalization;
mod raise;
mod salary;
mod tax_direction;

pub use currency_normalization::{convert_from_eur, normalize_to_eur};
pub use expansion::expand_currency_rates;
pub use period_normalization::{from_hourly, to_hourly};
pub use raise::{project_raise, raise_multiplier, requested_raise};
pub use salary::calculate_salary;
pub use tax_direction::{HourlyPair, resolve_tax};
