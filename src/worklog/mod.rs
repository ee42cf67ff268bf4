//! Work-use percentage resolution for the Deduction Calculation Engine.
//!
//! This module turns a daily attendance log into the work-use percentage
//! the deduction calculation needs: parsing raw CSV or JSON rows into
//! validated entries, filtering by date range or Australian financial
//! year, aggregating into overall and per-month statistics, and the
//! resolve step that accepts either a static percentage or a log but
//! never both.

mod calculator;
mod filter;
mod parser;
mod resolver;

pub use calculator::calculate;
pub use filter::{FinancialYear, filter_by_financial_year, filter_by_range};
pub use parser::{
    CsvLogRow, JsonLogEntry, WorkLogDocument, parse_csv_rows, parse_json_document,
};
pub use resolver::resolve;
