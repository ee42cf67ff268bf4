//! Work-use percentage result models.
//!
//! This module contains the [`WorkUsePercentageResult`] type and its
//! per-month breakdown, produced by the work-log percentage calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day counts and ratio for one calendar month of a work log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    /// Days worked from home in the month.
    pub wfh_days: u32,
    /// Days worked at the office in the month.
    pub office_days: u32,
    /// Total logged days in the month.
    pub total_days: u32,
    /// Work-from-home percentage for the month, 0-100, one decimal place.
    pub percentage: Decimal,
}

/// The work-use percentage derived from a daily attendance log.
///
/// The headline percentage is in the 0-100 range (not normalized to
/// 0-1). Day counts satisfy `wfh_days + office_days == total_days`;
/// every entry is one or the other.
///
/// # Example
///
/// ```
/// use deduction_engine::models::WorkUsePercentageResult;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let result = WorkUsePercentageResult {
///     percentage: Decimal::from_str("60.0").unwrap(),
///     wfh_days: 3,
///     office_days: 2,
///     total_days: 5,
///     monthly_breakdown: BTreeMap::new(),
/// };
/// assert_eq!(result.wfh_days + result.office_days, result.total_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUsePercentageResult {
    /// Work-from-home percentage across the whole log, 0-100, one
    /// decimal place (half away from zero).
    pub percentage: Decimal,
    /// Total days worked from home.
    pub wfh_days: u32,
    /// Total days worked at the office.
    pub office_days: u32,
    /// Total logged days.
    pub total_days: u32,
    /// Per-month counts keyed by `YYYY-MM`. The key format makes the
    /// map's natural ordering chronological.
    pub monthly_breakdown: BTreeMap<String, MonthlyBreakdown>,
}
