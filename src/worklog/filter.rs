//! Work log filtering by date range and Australian financial year.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkLogEntry;

/// An Australian financial year: July 1 through June 30, inclusive.
///
/// Labeled by its two calendar years, e.g. `"2024-2025"` runs from
/// 2024-07-01 to 2025-06-30.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialYear {
    label: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl FinancialYear {
    /// Parses a financial year label of the form `YYYY-YYYY`.
    ///
    /// The second year must be exactly one after the first.
    ///
    /// # Arguments
    ///
    /// * `label` - The financial year label, e.g. `"2024-2025"`
    ///
    /// # Returns
    ///
    /// * `Ok(FinancialYear)` - The parsed year with its date bounds
    /// * `Err(EngineError::InvalidFinancialYearFormat)` - If the label is
    ///   not two consecutive four-digit years
    ///
    /// # Example
    ///
    /// ```
    /// use deduction_engine::worklog::FinancialYear;
    /// use chrono::NaiveDate;
    ///
    /// let fy = FinancialYear::parse("2024-2025").unwrap();
    /// assert_eq!(fy.start_date(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    /// assert_eq!(fy.end_date(), NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    /// ```
    pub fn parse(label: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidFinancialYearFormat {
            label: label.to_string(),
        };

        let (first, second) = label.split_once('-').ok_or_else(invalid)?;
        if first.len() != 4 || second.len() != 4 {
            return Err(invalid());
        }

        let start_year: i32 = first.parse().map_err(|_| invalid())?;
        let end_year: i32 = second.parse().map_err(|_| invalid())?;
        if end_year != start_year + 1 {
            return Err(invalid());
        }

        let start = NaiveDate::from_ymd_opt(start_year, 7, 1).ok_or_else(invalid)?;
        let end = NaiveDate::from_ymd_opt(end_year, 6, 30).ok_or_else(invalid)?;

        Ok(Self {
            label: label.to_string(),
            start,
            end,
        })
    }

    /// The label this year was parsed from, e.g. `"2024-2025"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// July 1 of the first calendar year.
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// June 30 of the second calendar year.
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }
}

/// Returns the entries dated within `[start, end]`, both ends inclusive.
///
/// An empty result is not an error; the caller decides whether an empty
/// period is fatal. An inverted range selects nothing.
pub fn filter_by_range(
    entries: &[WorkLogEntry],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WorkLogEntry> {
    entries
        .iter()
        .filter(|entry| entry.date >= start && entry.date <= end)
        .cloned()
        .collect()
}

/// Returns the entries falling within the labeled financial year.
///
/// # Arguments
///
/// * `entries` - The parsed work log
/// * `label` - Financial year label, e.g. `"2024-2025"`
///
/// # Returns
///
/// * `Ok(Vec<WorkLogEntry>)` - Entries between July 1 and June 30
/// * `Err(EngineError::InvalidFinancialYearFormat)` - If the label does
///   not parse
pub fn filter_by_financial_year(
    entries: &[WorkLogEntry],
    label: &str,
) -> EngineResult<Vec<WorkLogEntry>> {
    let year = FinancialYear::parse(label)?;
    Ok(filter_by_range(entries, year.start_date(), year.end_date()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(s: &str) -> WorkLogEntry {
        WorkLogEntry {
            date: date(s),
            is_work_from_home: true,
            location: None,
            notes: None,
        }
    }

    /// FY-001: "2024-2025" spans 2024-07-01 through 2025-06-30.
    #[test]
    fn test_financial_year_bounds() {
        let fy = FinancialYear::parse("2024-2025").unwrap();

        assert_eq!(fy.label(), "2024-2025");
        assert_eq!(fy.start_date(), date("2024-07-01"));
        assert_eq!(fy.end_date(), date("2025-06-30"));
    }

    /// FY-002: Labels that are not two consecutive four-digit years fail.
    #[test]
    fn test_invalid_financial_year_labels() {
        for bad in [
            "2024-2026",
            "2025-2024",
            "2024/2025",
            "2024",
            "24-25",
            "2024-25",
            "abcd-efgh",
            "2024-2025-2026",
        ] {
            match FinancialYear::parse(bad) {
                Err(EngineError::InvalidFinancialYearFormat { label }) => {
                    assert_eq!(label, bad);
                }
                other => panic!("Expected error for {:?}, got {:?}", bad, other),
            }
        }
    }

    /// FY-003: Range filtering is inclusive on both ends.
    #[test]
    fn test_range_filter_is_inclusive() {
        let entries = vec![
            entry("2024-06-30"),
            entry("2024-07-01"),
            entry("2024-07-15"),
            entry("2024-07-31"),
            entry("2024-08-01"),
        ];

        let filtered = filter_by_range(&entries, date("2024-07-01"), date("2024-07-31"));
        let dates: Vec<NaiveDate> = filtered.iter().map(|e| e.date).collect();

        assert_eq!(
            dates,
            vec![date("2024-07-01"), date("2024-07-15"), date("2024-07-31")]
        );
    }

    /// FY-004: Financial year filtering keeps both boundary days and
    /// drops the days either side of them.
    #[test]
    fn test_financial_year_filter_boundaries() {
        let entries = vec![
            entry("2024-06-30"),
            entry("2024-07-01"),
            entry("2025-06-30"),
            entry("2025-07-01"),
        ];

        let filtered = filter_by_financial_year(&entries, "2024-2025").unwrap();
        let dates: Vec<NaiveDate> = filtered.iter().map(|e| e.date).collect();

        assert_eq!(dates, vec![date("2024-07-01"), date("2025-06-30")]);
    }

    /// FY-005: No entries in range yields an empty list, not an error.
    #[test]
    fn test_empty_selection_is_not_an_error() {
        let entries = vec![entry("2023-01-15")];

        let filtered = filter_by_financial_year(&entries, "2024-2025").unwrap();
        assert!(filtered.is_empty());

        let inverted = filter_by_range(&entries, date("2024-12-31"), date("2024-01-01"));
        assert!(inverted.is_empty());
    }
}
