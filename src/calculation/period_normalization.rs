//! Period normalization.
//!
//! Every calculation passes through an hourly rate. These two functions are
//! the linear unit conversion between a period amount and that rate.

use crate::models::Period;

/// Converts an amount quoted for `period` into an hourly amount.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::to_hourly;
/// use salary_calculator::models::Period;
///
/// assert_eq!(to_hourly(1600.0, Period::Month), 10.0);
/// assert_eq!(to_hourly(400.0, Period::Week), 10.0);
/// ```
pub fn to_hourly(amount: f64, period: Period) -> f64 {
    amount / period.hours()
}

/// Converts an hourly amount into the amount for `period`.
///
/// This is the inverse of [`to_hourly`].
pub fn from_hourly(hourly: f64, period: Period) -> f64 {
    hourly * period.hours()
}
