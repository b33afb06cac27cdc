//! Input validation for the Salary Conversion Engine.
//!
//! The calculation engine is total and accepts any number. Callers that want
//! to rule out meaningless results run [`validate_input`] before invoking it
//! and [`validate_result`] on what it returns.

use crate::error::{EngineError, EngineResult};
use crate::models::{SalaryInput, SalaryResult};

/// The lowest raise that still leaves a non-negative salary.
pub const MIN_RAISE_PERCENT: f64 = -100.0;

/// Checks that an input is within the ranges the engine gives meaningful
/// results for.
///
/// - the amount, when present, must be finite and not negative
/// - the tax rate must be finite and in `[0, 100)`
/// - each raise, when present, must be finite and not below -100%
///
/// # Examples
///
/// ```
/// use salary_calculator::models::{Currency, Period, SalaryInput, SalaryType};
/// use salary_calculator::validation::validate_input;
///
/// let input = SalaryInput::new(Some(5000.0), Currency::Eur, Period::Month, SalaryType::Net, 20.0);
/// assert!(validate_input(&input).is_ok());
///
/// let input = SalaryInput::new(Some(-1.0), Currency::Eur, Period::Month, SalaryType::Net, 20.0);
/// assert!(validate_input(&input).is_err());
/// ```
pub fn validate_input(input: &SalaryInput) -> EngineResult<()> {
    if let Some(amount) = input.amount {
        validate_amount(amount)?;
    }
    validate_tax_rate(input.tax_rate)?;
    if let Some(raise) = input.min_raise {
        validate_raise("min_raise", raise)?;
    }
    if let Some(raise) = input.comfortable_raise {
        validate_raise("comfortable_raise", raise)?;
    }
    Ok(())
}

fn validate_amount(amount: f64) -> EngineResult<()> {
    if !amount.is_finite() {
        return Err(EngineError::InvalidAmount {
            message: "must be a finite number".to_string(),
        });
    }
    if amount < 0.0 {
        return Err(EngineError::InvalidAmount {
            message: format!("must not be negative, got {}", amount),
        });
    }
    Ok(())
}

/// Checks that a tax rate is a finite percentage in `[0, 100)`.
///
/// 100% is excluded: grossing up a net amount at that rate divides by zero.
pub fn validate_tax_rate(tax_rate: f64) -> EngineResult<()> {
    if !tax_rate.is_finite() {
        return Err(EngineError::InvalidTaxRate {
            value: tax_rate,
            message: "must be a finite number".to_string(),
        });
    }
    if !(0.0..100.0).contains(&tax_rate) {
        return Err(EngineError::InvalidTaxRate {
            value: tax_rate,
            message: "must be at least 0 and below 100".to_string(),
        });
    }
    Ok(())
}

fn validate_raise(field: &str, raise: f64) -> EngineResult<()> {
    if !raise.is_finite() {
        return Err(EngineError::InvalidRaise {
            field: field.to_string(),
            value: raise,
            message: "must be a finite number".to_string(),
        });
    }
    if raise < MIN_RAISE_PERCENT {
        return Err(EngineError::InvalidRaise {
            field: field.to_string(),
            value: raise,
            message: format!("must not be below {}", MIN_RAISE_PERCENT),
        });
    }
    Ok(())
}

/// Checks that every amount in a result is a finite number.
///
/// An in-range input can still overflow once it is expanded to yearly
/// figures, converted to dollars or raised. Such a result has no JSON
/// representation.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_salary;
/// use salary_calculator::models::{Currency, Period, SalaryInput, SalaryType};
/// use salary_calculator::validation::validate_result;
///
/// let input = SalaryInput::new(Some(1e306), Currency::Eur, Period::Hour, SalaryType::Net, 0.0);
/// assert!(validate_result(&calculate_salary(&input)).is_err());
/// ```
pub fn validate_result(result: &SalaryResult) -> EngineResult<()> {
    match result.scenarios().find(|(_, rates)| !rates.is_finite()) {
        Some((scenario, _)) => Err(EngineError::ResultOutOfRange {
            scenario: scenario.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_salary;
    use crate::models::{Currency, Period, SalaryType};

    fn valid_input() -> SalaryInput {
        SalaryInput::new(
            Some(5000.0),
            Currency::Eur,
            Period::Month,
            SalaryType::Net,
            20.0,
        )
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_missing_amount_passes() {
        let input = SalaryInput {
            amount: None,
            ..valid_input()
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_zero_amount_passes() {
        let input = SalaryInput {
            amount: Some(0.0),
            ..valid_input()
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let input = SalaryInput {
            amount: Some(-10.0),
            ..valid_input()
        };
        match validate_input(&input) {
            Err(EngineError::InvalidAmount { message }) => {
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_amount_rejected() {
        let input = SalaryInput {
            amount: Some(f64::INFINITY),
            ..valid_input()
        };
        assert!(matches!(
            validate_input(&input),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_nan_amount_rejected() {
        let input = SalaryInput {
            amount: Some(f64::NAN),
            ..valid_input()
        };
        assert!(matches!(
            validate_input(&input),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(validate_tax_rate(0.0).is_ok());
        assert!(validate_tax_rate(99.99).is_ok());
        assert!(validate_tax_rate(100.0).is_err());
        assert!(validate_tax_rate(-0.5).is_err());
        assert!(validate_tax_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_full_tax_rate_rejected_with_value() {
        let input = SalaryInput {
            tax_rate: 100.0,
            ..valid_input()
        };
        match validate_input(&input) {
            Err(EngineError::InvalidTaxRate { value, .. }) => assert_eq!(value, 100.0),
            other => panic!("Expected InvalidTaxRate error, got {:?}", other),
        }
    }

    #[test]
    fn test_raises_pass_when_in_range() {
        let input = valid_input()
            .with_min_raise(0.0)
            .with_comfortable_raise(-100.0);
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_raise_below_minus_100_rejected() {
        let input = valid_input().with_comfortable_raise(-150.0);
        match validate_input(&input) {
            Err(EngineError::InvalidRaise { field, value, .. }) => {
                assert_eq!(field, "comfortable_raise");
                assert_eq!(value, -150.0);
            }
            other => panic!("Expected InvalidRaise error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_raise_rejected() {
        let input = valid_input().with_min_raise(f64::INFINITY);
        match validate_input(&input) {
            Err(EngineError::InvalidRaise { field, .. }) => assert_eq!(field, "min_raise"),
            other => panic!("Expected InvalidRaise error, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_checked_before_tax_rate() {
        let input = SalaryInput {
            amount: Some(-1.0),
            tax_rate: 150.0,
            ..valid_input()
        };
        assert!(matches!(
            validate_input(&input),
            Err(EngineError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_ordinary_result_passes() {
        let input = valid_input().with_min_raise(10.0).with_comfortable_raise(25.0);
        assert!(validate_result(&calculate_salary(&input)).is_ok());
    }

    #[test]
    fn test_huge_hourly_amount_passes_input_checks_but_overflows() {
        let input = SalaryInput::new(
            Some(1e306),
            Currency::Eur,
            Period::Hour,
            SalaryType::Net,
            0.0,
        );
        assert!(validate_input(&input).is_ok());

        match validate_result(&calculate_salary(&input)) {
            Err(EngineError::ResultOutOfRange { scenario }) => assert_eq!(scenario, "current"),
            other => panic!("Expected ResultOutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn test_overflow_from_raise_names_the_scenario() {
        let input = SalaryInput::new(
            Some(1e300),
            Currency::Eur,
            Period::Year,
            SalaryType::Net,
            0.0,
        )
        .with_comfortable_raise(1e12);
        assert!(validate_input(&input).is_ok());

        match validate_result(&calculate_salary(&input)) {
            Err(EngineError::ResultOutOfRange { scenario }) => {
                assert_eq!(scenario, "comfortable_raise")
            }
            other => panic!("Expected ResultOutOfRange error, got {:?}", other),
        }
    }
}
