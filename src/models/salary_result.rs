//! Salary result models.
//!
//! The output of a calculation is a fixed-shape record of records: for each
//! scenario, each currency, each tax treatment and each period there is
//! exactly one amount. The shape is closed, so completeness is guaranteed by
//! the types rather than checked at runtime.

use serde::{Deserialize, Serialize};

use super::{Currency, Period, SalaryType};

/// One amount per billing period.
///
/// # Example
///
/// ```
/// use salary_calculator::models::{Period, PeriodAmounts};
///
/// let amounts = PeriodAmounts::from_hourly(10.0);
/// assert_eq!(amounts.get(Period::Day), 80.0);
/// assert_eq!(amounts.get(Period::Month), 1600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodAmounts {
    /// Amount per hour.
    pub hour: f64,
    /// Amount per day.
    pub day: f64,
    /// Amount per week.
    pub week: f64,
    /// Amount per month.
    pub month: f64,
    /// Amount per year.
    pub year: f64,
}

impl PeriodAmounts {
    /// Scales an hourly amount out to every period.
    pub fn from_hourly(hourly: f64) -> Self {
        Self {
            hour: hourly * Period::Hour.hours(),
            day: hourly * Period::Day.hours(),
            week: hourly * Period::Week.hours(),
            month: hourly * Period::Month.hours(),
            year: hourly * Period::Year.hours(),
        }
    }

    /// Returns the amount for the given period.
    pub fn get(&self, period: Period) -> f64 {
        match period {
            Period::Hour => self.hour,
            Period::Day => self.day,
            Period::Week => self.week,
            Period::Month => self.month,
            Period::Year => self.year,
        }
    }

    /// Iterates over `(period, amount)` pairs, shortest period first.
    pub fn iter(&self) -> impl Iterator<Item = (Period, f64)> + '_ {
        Period::ALL.into_iter().map(move |period| (period, self.get(period)))
    }

    /// Returns `true` if every amount is a finite number.
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, amount)| amount.is_finite())
    }
}

/// Net and gross amounts for every period, in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRates {
    /// After-tax amounts.
    pub net: PeriodAmounts,
    /// Before-tax amounts.
    pub gross: PeriodAmounts,
}

impl SalaryRates {
    /// Returns the amounts for the given tax treatment.
    pub fn get(&self, salary_type: SalaryType) -> &PeriodAmounts {
        match salary_type {
            SalaryType::Net => &self.net,
            SalaryType::Gross => &self.gross,
        }
    }
}

/// Salary rates in every supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    /// Rates in euros.
    #[serde(rename = "EUR")]
    pub eur: SalaryRates,
    /// Rates in US dollars.
    #[serde(rename = "USD")]
    pub usd: SalaryRates,
}

impl CurrencyRates {
    /// Returns the rates for the given currency.
    pub fn get(&self, currency: Currency) -> &SalaryRates {
        match currency {
            Currency::Eur => &self.eur,
            Currency::Usd => &self.usd,
        }
    }

    /// Returns a single cell of the table.
    pub fn amount(&self, currency: Currency, salary_type: SalaryType, period: Period) -> f64 {
        self.get(currency).get(salary_type).get(period)
    }

    /// Returns `true` if every cell of the table is a finite number.
    pub fn is_finite(&self) -> bool {
        [&self.eur, &self.usd]
            .into_iter()
            .all(|rates| rates.net.is_finite() && rates.gross.is_finite())
    }
}

/// The complete result of a salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// The salary as entered, converted to every currency and period.
    pub current: CurrencyRates,
    /// The salary after the minimum raise, when one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_raise: Option<CurrencyRates>,
    /// The salary after the comfortable raise, when one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfortable_raise: Option<CurrencyRates>,
}

impl SalaryResult {
    /// Iterates over the scenarios present in the result, as
    /// `(name, rates)` pairs, starting with `current`.
    pub fn scenarios(&self) -> impl Iterator<Item = (&'static str, &CurrencyRates)> + '_ {
        [
            ("current", Some(&self.current)),
            ("min_raise", self.min_raise.as_ref()),
            ("comfortable_raise", self.comfortable_raise.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, rates)| rates.map(|rates| (name, rates)))
    }
}
