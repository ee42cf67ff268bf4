//! Work-use percentage resolution: static value or log-derived.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkLogEntry;

use super::calculator::calculate;

/// Resolves the work-use percentage from exactly one of two sources.
///
/// Either the caller supplies a fixed percentage, validated to the range
/// 0-100 and returned unchanged, or a parsed work log, whose entries are
/// aggregated by [`calculate`]. Supplying both or neither is ambiguous
/// and fails rather than picking one.
///
/// # Arguments
///
/// * `static_percentage` - A caller-supplied fixed percentage
/// * `entries` - A parsed work log
///
/// # Returns
///
/// * `Ok(Decimal)` - The percentage to apply across a processing run
/// * `Err(EngineError::AmbiguousWorkUseInput)` - Both or neither source
/// * `Err(EngineError::PercentageOutOfRange)` - Static value outside 0-100
/// * `Err(EngineError::EmptyLog)` - A log with no entries
///
/// # Example
///
/// ```
/// use deduction_engine::worklog::resolve;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pct = resolve(Some(Decimal::from_str("62.5").unwrap()), None).unwrap();
/// assert_eq!(pct, Decimal::from_str("62.5").unwrap());
/// ```
pub fn resolve(
    static_percentage: Option<Decimal>,
    entries: Option<&[WorkLogEntry]>,
) -> EngineResult<Decimal> {
    match (static_percentage, entries) {
        (Some(_), Some(_)) | (None, None) => Err(EngineError::AmbiguousWorkUseInput),
        (Some(value), None) => {
            if value < Decimal::ZERO || value > Decimal::from(100) {
                return Err(EngineError::PercentageOutOfRange { value });
            }
            Ok(value)
        }
        (None, Some(log)) => Ok(calculate(log)?.percentage),
    }
}
