//! Work-use percentage calculation from a parsed work log.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::calculation::round_percentage;
use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlyBreakdown, WorkLogEntry, WorkUsePercentageResult};

/// Calculates the work-from-home percentage for a set of log entries.
///
/// Every entry is one whole day, either at home or at the office; the
/// percentage is `wfh_days / total_days * 100` rounded to one decimal
/// place. The monthly breakdown applies the same ratio per calendar
/// month, keyed `YYYY-MM` in chronological order.
///
/// Pure function: no I/O, deterministic, independent of entry order.
///
/// # Arguments
///
/// * `entries` - The parsed (and optionally filtered) work log
///
/// # Returns
///
/// * `Ok(WorkUsePercentageResult)` - Overall and per-month statistics
/// * `Err(EngineError::EmptyLog)` - If there are no entries; the caller
///   decides the fallback, never this function
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use deduction_engine::models::WorkLogEntry;
/// use deduction_engine::worklog::calculate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entries: Vec<WorkLogEntry> = (1..=5)
///     .map(|day| WorkLogEntry {
///         date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
///         is_work_from_home: day <= 3,
///         location: None,
///         notes: None,
///     })
///     .collect();
///
/// let result = calculate(&entries).unwrap();
/// assert_eq!(result.percentage, Decimal::from_str("60.0").unwrap());
/// assert_eq!(result.wfh_days, 3);
/// assert_eq!(result.office_days, 2);
/// ```
pub fn calculate(entries: &[WorkLogEntry]) -> EngineResult<WorkUsePercentageResult> {
    if entries.is_empty() {
        return Err(EngineError::EmptyLog);
    }

    let total_days = entries.len() as u32;
    let wfh_days = entries.iter().filter(|e| e.is_work_from_home).count() as u32;
    let office_days = total_days - wfh_days;

    let mut monthly_breakdown: BTreeMap<String, MonthlyBreakdown> = BTreeMap::new();
    for entry in entries {
        let key = format!("{:04}-{:02}", entry.date.year(), entry.date.month());
        let month = monthly_breakdown.entry(key).or_insert(MonthlyBreakdown {
            wfh_days: 0,
            office_days: 0,
            total_days: 0,
            percentage: Decimal::ZERO,
        });

        month.total_days += 1;
        if entry.is_work_from_home {
            month.wfh_days += 1;
        } else {
            month.office_days += 1;
        }
    }
    for month in monthly_breakdown.values_mut() {
        month.percentage = wfh_ratio(month.wfh_days, month.total_days);
    }

    Ok(WorkUsePercentageResult {
        percentage: wfh_ratio(wfh_days, total_days),
        wfh_days,
        office_days,
        total_days,
        monthly_breakdown,
    })
}

/// The WFH ratio as a percentage, one decimal place.
///
/// Callers guarantee `total_days > 0`.
fn wfh_ratio(wfh_days: u32, total_days: u32) -> Decimal {
    round_percentage(Decimal::from(wfh_days) * Decimal::from(100) / Decimal::from(total_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(date: &str, wfh: bool) -> WorkLogEntry {
        WorkLogEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            is_work_from_home: wfh,
            location: None,
            notes: None,
        }
    }

    /// PC-001: Three WFH days out of five is 60.0%.
    #[test]
    fn test_three_of_five_days_is_sixty_percent() {
        let entries = vec![
            entry("2024-07-01", true),
            entry("2024-07-02", true),
            entry("2024-07-03", false),
            entry("2024-07-04", true),
            entry("2024-07-05", false),
        ];

        let result = calculate(&entries).unwrap();

        assert_eq!(result.percentage, dec("60.0"));
        assert_eq!(result.wfh_days, 3);
        assert_eq!(result.office_days, 2);
        assert_eq!(result.total_days, 5);
    }

    /// PC-002: An empty log is an error, never a silent default.
    #[test]
    fn test_empty_log_is_an_error() {
        assert!(matches!(calculate(&[]), Err(EngineError::EmptyLog)));
    }

    /// PC-003: All-home and all-office logs hit the bounds exactly.
    #[test]
    fn test_percentage_bounds() {
        let all_home = vec![entry("2024-07-01", true), entry("2024-07-02", true)];
        assert_eq!(calculate(&all_home).unwrap().percentage, dec("100.0"));

        let all_office = vec![entry("2024-07-01", false), entry("2024-07-02", false)];
        assert_eq!(calculate(&all_office).unwrap().percentage, dec("0.0"));
    }

    /// PC-004: The percentage carries one decimal place, half away
    /// from zero.
    #[test]
    fn test_percentage_rounding() {
        // 1/3 = 33.33..% and 2/3 = 66.66..%.
        let entries = vec![
            entry("2024-07-01", true),
            entry("2024-07-02", false),
            entry("2024-07-03", false),
        ];
        assert_eq!(calculate(&entries).unwrap().percentage, dec("33.3"));

        let entries = vec![
            entry("2024-07-01", true),
            entry("2024-07-02", true),
            entry("2024-07-03", false),
        ];
        assert_eq!(calculate(&entries).unwrap().percentage, dec("66.7"));

        // 5/8 = 62.5% exactly.
        let mut entries: Vec<WorkLogEntry> = (1..=5)
            .map(|d| entry(&format!("2024-07-{:02}", d), true))
            .collect();
        entries.extend((6..=8).map(|d| entry(&format!("2024-07-{:02}", d), false)));
        assert_eq!(calculate(&entries).unwrap().percentage, dec("62.5"));
    }

    /// PC-005: The monthly breakdown groups by calendar month in
    /// chronological order, each month internally consistent.
    #[test]
    fn test_monthly_breakdown() {
        let entries = vec![
            entry("2024-08-01", false),
            entry("2024-07-01", true),
            entry("2024-07-02", true),
            entry("2024-07-03", false),
            entry("2024-08-02", true),
            entry("2024-08-03", false),
            entry("2024-08-04", false),
        ];

        let result = calculate(&entries).unwrap();
        let months: Vec<&String> = result.monthly_breakdown.keys().collect();
        assert_eq!(months, vec!["2024-07", "2024-08"]);

        let july = &result.monthly_breakdown["2024-07"];
        assert_eq!(july.wfh_days, 2);
        assert_eq!(july.office_days, 1);
        assert_eq!(july.total_days, 3);
        assert_eq!(july.percentage, dec("66.7"));

        let august = &result.monthly_breakdown["2024-08"];
        assert_eq!(august.wfh_days, 1);
        assert_eq!(august.office_days, 3);
        assert_eq!(august.percentage, dec("25.0"));
    }

    /// PC-006: December to January crosses a year boundary and still
    /// sorts chronologically.
    #[test]
    fn test_breakdown_across_year_boundary() {
        let entries = vec![
            entry("2025-01-06", true),
            entry("2024-12-02", true),
            entry("2024-12-03", false),
        ];

        let result = calculate(&entries).unwrap();
        let months: Vec<&String> = result.monthly_breakdown.keys().collect();
        assert_eq!(months, vec!["2024-12", "2025-01"]);
    }

    /// PC-007: Entry order does not change the outcome.
    #[test]
    fn test_entry_order_is_irrelevant() {
        let ordered = vec![
            entry("2024-07-01", true),
            entry("2024-07-02", false),
            entry("2024-07-03", true),
        ];
        let shuffled = vec![
            entry("2024-07-03", true),
            entry("2024-07-01", true),
            entry("2024-07-02", false),
        ];

        assert_eq!(calculate(&ordered).unwrap(), calculate(&shuffled).unwrap());
    }

    /// PC-008: Day counts always reconcile.
    #[test]
    fn test_day_counts_reconcile() {
        let entries = vec![
            entry("2024-07-01", true),
            entry("2024-07-02", false),
            entry("2024-08-01", true),
        ];

        let result = calculate(&entries).unwrap();
        assert_eq!(result.wfh_days + result.office_days, result.total_days);

        for month in result.monthly_breakdown.values() {
            assert_eq!(month.wfh_days + month.office_days, month.total_days);
        }
    }
}
