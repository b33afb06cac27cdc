//! Error types for the Salary Conversion Engine.
//!
//! The calculation engine itself never fails. These errors cover the work
//! around it: loading configuration, validating caller input before the
//! engine is invoked and checking its output before it is reported.

use thiserror::Error;

/// The main error type for the Salary Conversion Engine.
///
/// # Example
///
/// ```
/// use salary_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/server.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/server.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The salary amount was negative or not a finite number.
    #[error("Invalid amount: {message}")]
    InvalidAmount {
        /// A description of what made the amount invalid.
        message: String,
    },

    /// The tax rate was outside the supported range.
    #[error("Invalid tax rate {value}: {message}")]
    InvalidTaxRate {
        /// The rejected tax rate, in percent.
        value: f64,
        /// A description of what made the tax rate invalid.
        message: String,
    },

    /// A raise percentage was outside the supported range.
    #[error("Invalid raise '{field}' ({value}): {message}")]
    InvalidRaise {
        /// The raise field that was invalid.
        field: String,
        /// The rejected raise, in percent.
        value: f64,
        /// A description of what made the raise invalid.
        message: String,
    },

    /// The input was valid but produced amounts too large to represent.
    #[error("Result out of range: scenario '{scenario}' does not fit in a finite number")]
    ResultOutOfRange {
        /// The scenario whose amounts overflowed.
        scenario: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
