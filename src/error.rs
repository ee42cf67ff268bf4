//! Error types for the Deduction Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during deduction calculation
//! and work-log processing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Deduction Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every error
/// is permanent for a given input: the engine performs no I/O beyond the
/// rule-file load, so there is no transient-failure class.
///
/// # Example
///
/// ```
/// use deduction_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule file not found: /missing/rules.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rule file was not found at the specified path.
    #[error("Rule file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule file could not be parsed.
    #[error("Failed to parse rule file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A category rule failed validation at load time.
    #[error("Invalid rule for category '{category}': {message}")]
    InvalidRuleDefinition {
        /// The category whose rule is invalid.
        category: String,
        /// A description of the missing or invalid field.
        message: String,
    },

    /// An expense amount was negative.
    #[error("Invalid expense amount {amount}: amounts cannot be negative")]
    InvalidExpenseAmount {
        /// The offending amount.
        amount: Decimal,
    },

    /// A work-log date did not match the strict `YYYY-MM-DD` format.
    #[error("Row {row}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The 1-based row ordinal as the user sees it in their file.
        row: usize,
        /// The value that failed to parse.
        value: String,
    },

    /// A work-from-home flag was not a recognized token.
    #[error("Row {row}: unrecognized work-from-home value '{value}'")]
    InvalidWfhValue {
        /// The 1-based row ordinal as the user sees it in their file.
        row: usize,
        /// The token that was not recognized.
        value: String,
    },

    /// A work-log row was missing its date or work-from-home flag.
    #[error("Row {row}: missing required field '{field}'")]
    MissingRequiredField {
        /// The 1-based row ordinal as the user sees it in their file.
        row: usize,
        /// The name of the missing field.
        field: String,
    },

    /// One or more dates appeared more than once in a work log.
    #[error("Duplicate dates in work log: {}", .dates.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", "))]
    DuplicateDates {
        /// Every date that appeared more than once, in ascending order.
        dates: Vec<NaiveDate>,
    },

    /// A financial year label did not match `YYYY-YYYY` with consecutive years.
    #[error("Invalid financial year '{label}' (expected YYYY-YYYY, e.g. 2024-2025)")]
    InvalidFinancialYearFormat {
        /// The label that failed to parse.
        label: String,
    },

    /// A percentage calculation was requested over zero work-log entries.
    #[error("Work log contains no entries")]
    EmptyLog,

    /// A static work-use percentage was outside the 0-100 range.
    #[error("Work-use percentage {value} is outside the range 0-100")]
    PercentageOutOfRange {
        /// The out-of-range percentage.
        value: Decimal,
    },

    /// Both or neither of the two work-use inputs were supplied.
    #[error("Supply exactly one of a static work-use percentage or a work log")]
    AmbiguousWorkUseInput,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
