//! Work log parsing functionality.
//!
//! Turns raw log rows, already decoded from a CSV or JSON file by the
//! caller, into validated [`WorkLogEntry`] values. Dates must be strict
//! `YYYY-MM-DD`, work-from-home flags accept the common yes/no spellings,
//! and duplicate dates fail the whole parse rather than being merged.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkLogEntry;

/// One raw row of a CSV work log.
///
/// Column headers are `Date`, `Location`, `WorkFromHome` and `Notes`.
/// Every field is optional at this stage so a short row still decodes;
/// [`parse_csv_rows`] enforces which fields are actually required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvLogRow {
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    /// Free-text location, unused by calculation.
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    /// Work-from-home flag: `Yes/No`, `True/False`, `1/0` or `Y/N`.
    #[serde(rename = "WorkFromHome", default)]
    pub work_from_home: Option<String>,
    /// Free-text notes, unused by calculation.
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
}

/// One raw entry of a JSON work log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: Option<String>,
    /// Free-text location, unused by calculation.
    #[serde(default)]
    pub location: Option<String>,
    /// Work-from-home flag: a native boolean, a `Yes/No`-style string,
    /// or the numbers `1`/`0`.
    #[serde(default)]
    pub wfh: Option<Value>,
    /// Free-text notes, unused by calculation.
    #[serde(default)]
    pub notes: Option<String>,
}

/// The JSON work log envelope: `{ financial_year, entries: [...] }`.
///
/// The `financial_year` label is carried for the caller's benefit (for
/// example to drive [`crate::worklog::filter_by_financial_year`]); parsing
/// itself never filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogDocument {
    /// Optional financial-year label, e.g. `"2024-2025"`.
    #[serde(default)]
    pub financial_year: Option<String>,
    /// The daily log entries.
    pub entries: Vec<JsonLogEntry>,
}

/// Parses raw CSV rows into validated work log entries.
///
/// Row numbers in errors count from 2, matching what the user sees in the
/// file (row 1 is the header). A single bad row fails the whole parse.
///
/// # Arguments
///
/// * `rows` - Raw rows decoded from a CSV work log
///
/// # Returns
///
/// * `Ok(Vec<WorkLogEntry>)` - Entries in row order
/// * `Err(EngineError)` - The first row-level problem, or every duplicate
///   date if dates repeat
///
/// # Example
///
/// ```
/// use deduction_engine::worklog::{CsvLogRow, parse_csv_rows};
///
/// let rows = vec![CsvLogRow {
///     date: Some("2024-07-01".to_string()),
///     location: Some("Home".to_string()),
///     work_from_home: Some("Yes".to_string()),
///     notes: None,
/// }];
///
/// let entries = parse_csv_rows(&rows).unwrap();
/// assert!(entries[0].is_work_from_home);
/// ```
pub fn parse_csv_rows(rows: &[CsvLogRow]) -> EngineResult<Vec<WorkLogEntry>> {
    let mut entries = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let ordinal = index + 2;

        let date_value = required_field(ordinal, &row.date, "Date")?;
        let date = parse_date(ordinal, date_value)?;

        let wfh_value = required_field(ordinal, &row.work_from_home, "WorkFromHome")?;
        let is_work_from_home = parse_wfh_token(ordinal, wfh_value)?;

        entries.push(WorkLogEntry {
            date,
            is_work_from_home,
            location: clean_optional(&row.location),
            notes: clean_optional(&row.notes),
        });
    }

    reject_duplicate_dates(&entries)?;
    Ok(entries)
}

/// Parses a JSON work log document into validated work log entries.
///
/// Entry numbers in errors count from 1. The envelope's `financial_year`
/// is not applied here; filtering is a separate step.
///
/// # Arguments
///
/// * `document` - The decoded `{ financial_year, entries }` envelope
///
/// # Returns
///
/// * `Ok(Vec<WorkLogEntry>)` - Entries in document order
/// * `Err(EngineError)` - The first entry-level problem, or every
///   duplicate date if dates repeat
pub fn parse_json_document(document: &WorkLogDocument) -> EngineResult<Vec<WorkLogEntry>> {
    let mut entries = Vec::with_capacity(document.entries.len());

    for (index, raw) in document.entries.iter().enumerate() {
        let ordinal = index + 1;

        let date_value = required_field(ordinal, &raw.date, "date")?;
        let date = parse_date(ordinal, date_value)?;

        let wfh_value = raw
            .wfh
            .as_ref()
            .ok_or_else(|| EngineError::MissingRequiredField {
                row: ordinal,
                field: "wfh".to_string(),
            })?;
        let is_work_from_home = parse_json_wfh(ordinal, wfh_value)?;

        entries.push(WorkLogEntry {
            date,
            is_work_from_home,
            location: clean_optional(&raw.location),
            notes: clean_optional(&raw.notes),
        });
    }

    reject_duplicate_dates(&entries)?;
    Ok(entries)
}

/// Extracts a required string field, treating blank values as missing.
fn required_field<'a>(
    row: usize,
    value: &'a Option<String>,
    field: &str,
) -> EngineResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EngineError::MissingRequiredField {
            row,
            field: field.to_string(),
        }),
    }
}

/// Parses a date strictly as `YYYY-MM-DD`.
///
/// Other orderings (`DD/MM/YYYY`, month names) are rejected rather than
/// guessed; AU/US day-month ambiguity is not worth a silent misread.
fn parse_date(row: usize, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDateFormat {
        row,
        value: value.to_string(),
    })
}

/// Normalizes a work-from-home token to a boolean.
///
/// Accepts `yes`/`true`/`1`/`y` and `no`/`false`/`0`/`n`, case-insensitive
/// and whitespace-tolerant. Anything else is an error, never a default.
fn parse_wfh_token(row: usize, value: &str) -> EngineResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "true" | "1" | "y" => Ok(true),
        "no" | "false" | "0" | "n" => Ok(false),
        _ => Err(EngineError::InvalidWfhValue {
            row,
            value: value.trim().to_string(),
        }),
    }
}

/// Normalizes a JSON work-from-home value to a boolean.
fn parse_json_wfh(row: usize, value: &Value) -> EngineResult<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(token) => parse_wfh_token(row, token),
        Value::Number(number) => match number.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(EngineError::InvalidWfhValue {
                row,
                value: number.to_string(),
            }),
        },
        other => Err(EngineError::InvalidWfhValue {
            row,
            value: other.to_string(),
        }),
    }
}

/// Trims an optional descriptive field, dropping it entirely when blank.
fn clean_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Fails with every duplicated date, in ascending order, if any date
/// appears more than once.
fn reject_duplicate_dates(entries: &[WorkLogEntry]) -> EngineResult<()> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.date).or_insert(0) += 1;
    }

    let duplicates: Vec<NaiveDate> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(date, _)| date)
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(EngineError::DuplicateDates { dates: duplicates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_row(date: &str, wfh: &str) -> CsvLogRow {
        CsvLogRow {
            date: Some(date.to_string()),
            location: None,
            work_from_home: Some(wfh.to_string()),
            notes: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// WL-001: CSV rows parse in order with normalized flags.
    #[test]
    fn test_csv_rows_parse_in_order() {
        let rows = vec![
            csv_row("2024-07-01", "Yes"),
            csv_row("2024-07-02", "no"),
            csv_row("2024-07-03", "TRUE"),
        ];

        let entries = parse_csv_rows(&rows).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, date("2024-07-01"));
        assert!(entries[0].is_work_from_home);
        assert!(!entries[1].is_work_from_home);
        assert!(entries[2].is_work_from_home);
    }

    /// WL-002: Every documented flag spelling normalizes, case-insensitive
    /// and whitespace-tolerant.
    #[test]
    fn test_all_wfh_token_spellings() {
        for token in ["yes", "YES", "true", "True", "1", "y", "Y", " yes "] {
            let entries = parse_csv_rows(&[csv_row("2024-07-01", token)]).unwrap();
            assert!(entries[0].is_work_from_home, "token {:?}", token);
        }

        for token in ["no", "NO", "false", "False", "0", "n", "N", " no "] {
            let entries = parse_csv_rows(&[csv_row("2024-07-01", token)]).unwrap();
            assert!(!entries[0].is_work_from_home, "token {:?}", token);
        }
    }

    /// WL-003: An unrecognized flag token is an error, not a default.
    #[test]
    fn test_unrecognized_wfh_token_is_rejected() {
        let rows = vec![csv_row("2024-07-01", "Yes"), csv_row("2024-07-02", "maybe")];

        let result = parse_csv_rows(&rows);

        match result {
            Err(EngineError::InvalidWfhValue { row, value }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "maybe");
            }
            other => panic!("Expected InvalidWfhValue, got {:?}", other),
        }
    }

    /// WL-004: Only strict YYYY-MM-DD dates are accepted. Day-first and
    /// month-name forms are rejected rather than guessed.
    #[test]
    fn test_non_iso_dates_are_rejected() {
        for bad in ["14/07/2024", "07-14-2024", "July 1 2024", "2024.07.01"] {
            let result = parse_csv_rows(&[csv_row(bad, "Yes")]);
            match result {
                Err(EngineError::InvalidDateFormat { row, value }) => {
                    assert_eq!(row, 2);
                    assert_eq!(value, bad);
                }
                other => panic!("Expected InvalidDateFormat for {:?}, got {:?}", bad, other),
            }
        }
    }

    /// WL-005: Missing or blank required fields name the CSV column.
    #[test]
    fn test_missing_required_csv_fields() {
        let no_date = CsvLogRow {
            date: None,
            work_from_home: Some("Yes".to_string()),
            ..CsvLogRow::default()
        };
        match parse_csv_rows(&[no_date]) {
            Err(EngineError::MissingRequiredField { row, field }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "Date");
            }
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }

        let blank_flag = CsvLogRow {
            date: Some("2024-07-01".to_string()),
            work_from_home: Some("   ".to_string()),
            ..CsvLogRow::default()
        };
        match parse_csv_rows(&[blank_flag]) {
            Err(EngineError::MissingRequiredField { field, .. }) => {
                assert_eq!(field, "WorkFromHome");
            }
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }
    }

    /// WL-006: Two rows dated 2024-07-01 fail the parse naming that date.
    #[test]
    fn test_duplicate_date_fails_parse() {
        let rows = vec![
            csv_row("2024-07-01", "Yes"),
            csv_row("2024-07-01", "No"),
            csv_row("2024-07-02", "Yes"),
        ];

        match parse_csv_rows(&rows) {
            Err(EngineError::DuplicateDates { dates }) => {
                assert_eq!(dates, vec![date("2024-07-01")]);
            }
            other => panic!("Expected DuplicateDates, got {:?}", other),
        }
    }

    /// WL-007: Every duplicated date is reported, ascending, each once.
    #[test]
    fn test_all_duplicate_dates_reported_ascending() {
        let rows = vec![
            csv_row("2024-07-09", "Yes"),
            csv_row("2024-07-01", "Yes"),
            csv_row("2024-07-09", "No"),
            csv_row("2024-07-01", "No"),
            csv_row("2024-07-01", "Yes"),
            csv_row("2024-07-05", "No"),
        ];

        match parse_csv_rows(&rows) {
            Err(EngineError::DuplicateDates { dates }) => {
                assert_eq!(dates, vec![date("2024-07-01"), date("2024-07-09")]);
            }
            other => panic!("Expected DuplicateDates, got {:?}", other),
        }
    }

    /// WL-008: Blank location and notes collapse to None, populated ones
    /// are trimmed and kept.
    #[test]
    fn test_optional_fields_are_cleaned() {
        let row = CsvLogRow {
            date: Some("2024-07-01".to_string()),
            location: Some("  Home  ".to_string()),
            work_from_home: Some("Yes".to_string()),
            notes: Some("   ".to_string()),
        };

        let entries = parse_csv_rows(&[row]).unwrap();

        assert_eq!(entries[0].location.as_deref(), Some("Home"));
        assert_eq!(entries[0].notes, None);
    }

    /// WL-009: JSON flags accept native booleans, string tokens and 0/1
    /// numbers; anything else is rejected.
    #[test]
    fn test_json_wfh_value_forms() {
        let document: WorkLogDocument = serde_json::from_str(
            r#"{
                "financial_year": "2024-2025",
                "entries": [
                    {"date": "2024-07-01", "wfh": true},
                    {"date": "2024-07-02", "wfh": "No"},
                    {"date": "2024-07-03", "wfh": 1},
                    {"date": "2024-07-04", "wfh": 0}
                ]
            }"#,
        )
        .unwrap();

        let entries = parse_json_document(&document).unwrap();
        let flags: Vec<bool> = entries.iter().map(|e| e.is_work_from_home).collect();
        assert_eq!(flags, vec![true, false, true, false]);
    }

    /// WL-010: JSON entry ordinals count from 1, not 2.
    #[test]
    fn test_json_ordinals_count_from_one() {
        let document: WorkLogDocument = serde_json::from_str(
            r#"{"entries": [{"date": "01/07/2024", "wfh": true}]}"#,
        )
        .unwrap();

        match parse_json_document(&document) {
            Err(EngineError::InvalidDateFormat { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "01/07/2024");
            }
            other => panic!("Expected InvalidDateFormat, got {:?}", other),
        }
    }

    /// WL-011: A numeric flag other than 0/1, and a null flag, both fail.
    #[test]
    fn test_json_rejects_odd_wfh_values() {
        let two: WorkLogDocument = serde_json::from_str(
            r#"{"entries": [{"date": "2024-07-01", "wfh": 2}]}"#,
        )
        .unwrap();
        match parse_json_document(&two) {
            Err(EngineError::InvalidWfhValue { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "2");
            }
            other => panic!("Expected InvalidWfhValue, got {:?}", other),
        }

        let null: WorkLogDocument = serde_json::from_str(
            r#"{"entries": [{"date": "2024-07-01", "wfh": null}]}"#,
        )
        .unwrap();
        match parse_json_document(&null) {
            Err(EngineError::MissingRequiredField { row, field }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "wfh");
            }
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }
    }

    /// WL-012: One bad row aborts the whole parse; no partial entries
    /// leak out for the caller to misuse.
    #[test]
    fn test_bad_row_aborts_whole_parse() {
        let rows = vec![
            csv_row("2024-07-01", "Yes"),
            csv_row("2024-07-02", "Yes"),
            csv_row("not-a-date", "Yes"),
            csv_row("2024-07-04", "Yes"),
        ];

        assert!(matches!(
            parse_csv_rows(&rows),
            Err(EngineError::InvalidDateFormat { row: 4, .. })
        ));
    }

    /// WL-013: An empty row list parses to an empty entry list; deciding
    /// whether that is fatal belongs to the percentage calculation.
    #[test]
    fn test_empty_input_parses_to_empty_list() {
        assert!(parse_csv_rows(&[]).unwrap().is_empty());

        let document = WorkLogDocument {
            financial_year: None,
            entries: vec![],
        };
        assert!(parse_json_document(&document).unwrap().is_empty());
    }
}
