//! Raise scenario projection.
//!
//! A raise scenario scales the baseline hourly pair by a percentage and runs
//! the same expansion as the current salary. Scenarios are independent: each
//! one is projected from the baseline, never from another scenario.

use crate::models::CurrencyRates;

use super::expansion::expand_currency_rates;
use super::tax_direction::HourlyPair;

/// Returns the multiplier for a raise given in percent.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::raise_multiplier;
///
/// assert!((raise_multiplier(10.0) - 1.1).abs() < 1e-12);
/// assert_eq!(raise_multiplier(-50.0), 0.5);
/// ```
pub fn raise_multiplier(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// Returns the raise percentage if a scenario was requested.
///
/// An absent raise, a raise of exactly zero and a NaN raise all mean "no
/// scenario".
pub fn requested_raise(raise: Option<f64>) -> Option<f64> {
    raise.filter(|percent| *percent != 0.0 && !percent.is_nan())
}

/// Projects a raise scenario from the baseline hourly pair.
///
/// Returns `None` when no raise was requested.
pub fn project_raise(baseline: HourlyPair, raise: Option<f64>) -> Option<CurrencyRates> {
    requested_raise(raise)
        .map(|percent| expand_currency_rates(baseline.scale(raise_multiplier(percent))))
}
