//! Salary calculation entry point.
//!
//! Runs the full pipeline: currency normalization, period normalization,
//! tax-direction resolution, then expansion for the current salary and each
//! requested raise scenario.

use tracing::debug;

use crate::models::{SalaryInput, SalaryResult};

use super::currency_normalization::normalize_to_eur;
use super::expansion::expand_currency_rates;
use super::period_normalization::to_hourly;
use super::raise::project_raise;
use super::tax_direction::resolve_tax;

/// Calculates every period, currency and tax figure for a salary.
///
/// The calculation never fails. Out-of-range input is not rejected here; it
/// surfaces as unusual numbers (negative amounts, infinite gross figures for
/// a net salary taxed at 100%). Run
/// [`validate_input`](crate::validation::validate_input) first to rule those
/// out.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_salary;
/// use salary_calculator::models::{Currency, Period, SalaryInput, SalaryType};
///
/// let input = SalaryInput::new(Some(1000.0), Currency::Eur, Period::Month, SalaryType::Net, 0.0)
///     .with_min_raise(10.0);
/// let result = calculate_salary(&input);
///
/// assert!((result.current.eur.net.year - 12000.0).abs() < 1e-6);
/// assert!((result.min_raise.unwrap().eur.net.month - 1100.0).abs() < 1e-6);
/// assert!(result.comfortable_raise.is_none());
/// ```
pub fn calculate_salary(input: &SalaryInput) -> SalaryResult {
    let amount_in_eur = normalize_to_eur(input.amount_or_zero(), input.currency);
    let hourly_amount = to_hourly(amount_in_eur, input.period);
    let hourly_eur = resolve_tax(hourly_amount, input.salary_type, input.tax_rate);

    debug!(
        currency = %input.currency,
        period = %input.period,
        hourly_net_eur = hourly_eur.net,
        hourly_gross_eur = hourly_eur.gross,
        "Resolved hourly baseline"
    );

    SalaryResult {
        current: expand_currency_rates(hourly_eur),
        min_raise: project_raise(hourly_eur, input.min_raise),
        comfortable_raise: project_raise(hourly_eur, input.comfortable_raise),
    }
}
