//! Response types for the salary calculator API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{SalaryInput, SalaryResult};

/// The engine version reported with every calculation.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Successful response body for the `/calculate` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The input the engine ran on, after defaults were applied.
    pub input: SalaryInput,
    /// The calculated figures.
    pub result: SalaryResult,
}

impl CalculationResponse {
    /// Wraps a result with calculation metadata.
    pub fn new(calculation_id: Uuid, input: SalaryInput, result: SalaryResult) -> Self {
        Self {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            input,
            result,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidAmount { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    message,
                    "The amount must be a non-negative number",
                ),
            },
            EngineError::InvalidTaxRate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TAX_RATE",
                    message,
                    "The tax rate must be at least 0 and below 100",
                ),
            },
            EngineError::InvalidRaise { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RAISE",
                    message,
                    format!("The field '{}' must not be below -100", field),
                ),
            },
            EngineError::ResultOutOfRange { scenario } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RESULT_OUT_OF_RANGE",
                    message,
                    format!("Reduce the amount or raises so the '{}' figures stay finite", scenario),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_salary;
    use crate::models::{Currency, Period, SalaryType};

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_tax_rate_maps_to_bad_request() {
        let engine_error = EngineError::InvalidTaxRate {
            value: 120.0,
            message: "must be at least 0 and below 100".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TAX_RATE");
        assert!(api_error.error.message.contains("120"));
    }

    #[test]
    fn test_invalid_raise_names_the_field() {
        let engine_error = EngineError::InvalidRaise {
            field: "min_raise".to_string(),
            value: -200.0,
            message: "must not be below -100".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RAISE");
        assert!(api_error.error.details.unwrap().contains("min_raise"));
    }

    #[test]
    fn test_result_out_of_range_maps_to_bad_request() {
        let engine_error = EngineError::ResultOutOfRange {
            scenario: "min_raise".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "RESULT_OUT_OF_RANGE");
        assert!(api_error.error.message.contains("min_raise"));
    }

    #[tokio::test]
    async fn test_error_response_is_json_with_status() {
        let response = ApiErrorResponse::from(EngineError::InvalidAmount {
            message: "must not be negative".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_AMOUNT");
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_calculation_response_carries_metadata() {
        let input = SalaryInput::new(
            Some(1000.0),
            Currency::Eur,
            Period::Month,
            SalaryType::Net,
            0.0,
        );
        let result = calculate_salary(&input);
        let id = Uuid::new_v4();

        let response = CalculationResponse::new(id, input.clone(), result);
        assert_eq!(response.calculation_id, id);
        assert_eq!(response.engine_version, ENGINE_VERSION);
        assert_eq!(response.input, input);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["result"]["current"]["EUR"]["net"]["month"], 1000.0);
        assert_eq!(json["input"]["type"], "net");
    }
}
