//! Work-log entry model.
//!
//! This module defines the WorkLogEntry struct, one per calendar day of
//! a daily attendance log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one validated day in a work-from-home attendance log.
///
/// Entries are produced by the log parser, held in memory for the
/// duration of a percentage calculation, and never mutated. Dates are
/// unique within a log; the parser rejects duplicates.
///
/// # Example
///
/// ```
/// use deduction_engine::models::WorkLogEntry;
/// use chrono::NaiveDate;
///
/// let entry = WorkLogEntry {
///     date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     is_work_from_home: true,
///     location: Some("Home".to_string()),
///     notes: None,
/// };
/// assert!(entry.is_work_from_home);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    /// The calendar day this entry describes.
    pub date: NaiveDate,
    /// Whether the day was worked from home. Every entry is either a
    /// home day or an office day; there is no partial-day concept.
    pub is_work_from_home: bool,
    /// Optional location label from the source log. Not used by any
    /// calculation.
    #[serde(default)]
    pub location: Option<String>,
    /// Optional free-text notes from the source log. Not used by any
    /// calculation.
    #[serde(default)]
    pub notes: Option<String>,
}
