//! Currency normalization.
//!
//! All arithmetic happens in euros. Amounts quoted in another currency are
//! brought to EUR on the way in and expanded back out on the way out.

use crate::models::Currency;

/// Converts an amount quoted in `currency` into euros.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::normalize_to_eur;
/// use salary_calculator::models::Currency;
///
/// assert_eq!(normalize_to_eur(100.0, Currency::Eur), 100.0);
/// assert!((normalize_to_eur(105.0, Currency::Usd) - 100.0).abs() < 1e-9);
/// ```
pub fn normalize_to_eur(amount: f64, currency: Currency) -> f64 {
    match currency {
        Currency::Eur => amount,
        Currency::Usd => amount / currency.per_eur(),
    }
}

/// Converts an amount in euros into `currency`.
pub fn convert_from_eur(amount_in_eur: f64, currency: Currency) -> f64 {
    match currency {
        Currency::Eur => amount_in_eur,
        Currency::Usd => amount_in_eur * currency.per_eur(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_eur_passes_through_unchanged() {
        assert_eq!(normalize_to_eur(1234.5, Currency::Eur), 1234.5);
        assert_eq!(convert_from_eur(1234.5, Currency::Eur), 1234.5);
    }

    #[test]
    fn test_usd_divided_by_rate() {
        assert_close(normalize_to_eur(105.0, Currency::Usd), 100.0);
    }

    #[test]
    fn test_eur_to_usd_multiplied_by_rate() {
        assert_close(convert_from_eur(100.0, Currency::Usd), 105.0);
    }

    #[test]
    fn test_round_trip_through_usd() {
        let eur = 3210.75;
        assert_close(
            normalize_to_eur(convert_from_eur(eur, Currency::Usd), Currency::Usd),
            eur,
        );
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(normalize_to_eur(0.0, Currency::Usd), 0.0);
    }
}
