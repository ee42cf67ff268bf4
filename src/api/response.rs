//! Response types for the Deduction Calculation Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Rule file not found: {}", path),
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
            EngineError::InvalidRuleDefinition { category, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RULE_DEFINITION",
                    format!("Invalid rule for category '{}'", category),
                    message,
                ),
            },
            EngineError::InvalidExpenseAmount { amount } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EXPENSE_AMOUNT",
                    format!("Invalid expense amount: {}", amount),
                    "Expense amounts cannot be negative",
                ),
            },
            EngineError::InvalidDateFormat { row, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_FORMAT",
                    format!("Row {}: invalid date '{}'", row, value),
                    "Work log dates must use the YYYY-MM-DD format",
                ),
            },
            EngineError::InvalidWfhValue { row, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WFH_VALUE",
                    format!("Row {}: unrecognized work-from-home value '{}'", row, value),
                    "Accepted values are Yes/No, True/False, 1/0 and Y/N",
                ),
            },
            EngineError::MissingRequiredField { row, field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_REQUIRED_FIELD",
                    format!("Row {}: missing required field '{}'", row, field),
                    "Every work log row needs a date and a work-from-home flag",
                ),
            },
            EngineError::DuplicateDates { dates } => {
                let listed = dates
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::with_details(
                        "DUPLICATE_DATES",
                        "Duplicate dates in work log",
                        format!("Each date may appear at most once: {}", listed),
                    ),
                }
            }
            EngineError::InvalidFinancialYearFormat { label } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_FINANCIAL_YEAR",
                    format!("Invalid financial year '{}'", label),
                    "Expected two consecutive years, e.g. 2024-2025",
                ),
            },
            EngineError::EmptyLog => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EMPTY_WORK_LOG",
                    "Work log contains no entries",
                    "Supply at least one daily entry, or a static percentage instead",
                ),
            },
            EngineError::PercentageOutOfRange { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PERCENTAGE_OUT_OF_RANGE",
                    format!("Work-use percentage {} is out of range", value),
                    "The percentage must be between 0 and 100 inclusive",
                ),
            },
            EngineError::AmbiguousWorkUseInput => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AMBIGUOUS_WORK_USE_INPUT",
                    "Ambiguous work-use input",
                    "Supply exactly one of work_use_percentage or work_log",
                ),
            },
        }
    }
}
