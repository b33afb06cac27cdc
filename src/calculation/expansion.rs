//! Period and currency expansion.
//!
//! Fans an hourly EUR pair out into a complete [`CurrencyRates`] table:
//! both currencies, both tax treatments, every period.

use crate::models::{Currency, CurrencyRates, PeriodAmounts, SalaryRates};

use super::currency_normalization::convert_from_eur;
use super::tax_direction::HourlyPair;

/// Expands an hourly EUR pair into every currency and period.
///
/// USD figures are derived by converting the hourly amounts first and then
/// scaling out to each period.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::{HourlyPair, expand_currency_rates};
/// use salary_calculator::models::{Currency, Period, SalaryType};
///
/// let rates = expand_currency_rates(HourlyPair { net: 10.0, gross: 12.5 });
/// assert_eq!(rates.amount(Currency::Eur, SalaryType::Net, Period::Month), 1600.0);
/// assert!((rates.amount(Currency::Usd, SalaryType::Net, Period::Hour) - 10.5).abs() < 1e-9);
/// ```
pub fn expand_currency_rates(hourly_eur: HourlyPair) -> CurrencyRates {
    CurrencyRates {
        eur: salary_rates(hourly_eur, Currency::Eur),
        usd: salary_rates(hourly_eur, Currency::Usd),
    }
}

fn salary_rates(hourly_eur: HourlyPair, currency: Currency) -> SalaryRates {
    SalaryRates {
        net: PeriodAmounts::from_hourly(convert_from_eur(hourly_eur.net, currency)),
        gross: PeriodAmounts::from_hourly(convert_from_eur(hourly_eur.gross, currency)),
    }
}
