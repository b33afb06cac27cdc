//! Currency model.
//!
//! Two currencies are supported, linked by one compiled-in exchange rate.
//! There is no rate lookup: EUR is the base currency and USD is derived
//! from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How many US dollars one euro buys.
pub const EUR_TO_USD_RATE: f64 = 1.05;

/// A supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro, the base currency of every calculation.
    #[serde(rename = "EUR")]
    Eur,
    /// US dollar.
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Every currency, base currency first.
    pub const ALL: [Currency; 2] = [Currency::Eur, Currency::Usd];

    /// Returns how many units of this currency one euro is worth.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_calculator::models::Currency;
    ///
    /// assert_eq!(Currency::Eur.per_eur(), 1.0);
    /// assert_eq!(Currency::Usd.per_eur(), 1.05);
    /// ```
    pub fn per_eur(self) -> f64 {
        match self {
            Currency::Eur => 1.0,
            Currency::Usd => EUR_TO_USD_RATE,
        }
    }

    /// Returns the ISO 4217 code of this currency.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eur_is_base_currency() {
        assert_eq!(Currency::Eur.per_eur(), 1.0);
        assert_eq!(Currency::ALL[0], Currency::Eur);
    }

    #[test]
    fn test_usd_uses_fixed_rate() {
        assert_eq!(Currency::Usd.per_eur(), EUR_TO_USD_RATE);
    }

    #[test]
    fn test_serializes_as_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let currency: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(currency, Currency::Eur);
    }

    #[test]
    fn test_lowercase_code_rejected() {
        let result: Result<Currency, _> = serde_json::from_str("\"usd\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Usd.to_string(), "USD");
    }
}
