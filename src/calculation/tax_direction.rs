//! Tax-direction resolution.
//!
//! A caller quotes either a net or a gross figure. This module derives the
//! other side using a flat tax rate, producing the hourly EUR pair every
//! output is built from.

use crate::models::SalaryType;

/// Net and gross amounts for one hour of work, in euros.
///
/// This pair is the single intermediate representation of a calculation;
/// every cell of a result is derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyPair {
    /// Hourly amount after tax.
    pub net: f64,
    /// Hourly amount before tax.
    pub gross: f64,
}

impl HourlyPair {
    /// Scales both sides of the pair by the same factor.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            net: self.net * factor,
            gross: self.gross * factor,
        }
    }
}

/// Resolves an hourly amount into its net and gross sides.
///
/// `tax_rate` is a percentage. A net amount is grossed up with
/// `net / (1 - rate)`; a gross amount is reduced with `gross * (1 - rate)`.
/// The rate is not range-checked: a net amount at 100% yields an infinite
/// gross side.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::resolve_tax;
/// use salary_calculator::models::SalaryType;
///
/// let pair = resolve_tax(1000.0, SalaryType::Net, 20.0);
/// assert!((pair.gross - 1250.0).abs() < 1e-9);
///
/// let pair = resolve_tax(1250.0, SalaryType::Gross, 20.0);
/// assert!((pair.net - 1000.0).abs() < 1e-9);
/// ```
pub fn resolve_tax(hourly_amount: f64, salary_type: SalaryType, tax_rate: f64) -> HourlyPair {
    let rate = tax_rate / 100.0;

    match salary_type {
        SalaryType::Net => HourlyPair {
            net: hourly_amount,
            gross: hourly_amount / (1.0 - rate),
        },
        SalaryType::Gross => HourlyPair {
            net: hourly_amount * (1.0 - rate),
            gross: hourly_amount,
        },
    }
}
