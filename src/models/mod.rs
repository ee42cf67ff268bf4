//! Core data models for the Deduction Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod deduction;
mod expense;
mod percentage;
mod report;
mod work_log;

pub use deduction::DeductionResult;
pub use expense::ExpenseRecord;
pub use percentage::{MonthlyBreakdown, WorkUsePercentageResult};
pub use report::{DeductionReport, DeductionTotals, WorkUseSource, WorkUseSummary};
pub use work_log::WorkLogEntry;
