//! Deduction report models.
//!
//! This module contains the [`DeductionReport`] envelope returned by the
//! calculation endpoint: the resolved work-use percentage, one deduction
//! result per expense, and aggregated totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DeductionResult, WorkUsePercentageResult};

/// How the work-use percentage for a report was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkUseSource {
    /// A caller-supplied fixed percentage.
    Static,
    /// Derived from a daily attendance log.
    WorkLog,
}

/// The work-use percentage applied to a report, with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkUseSummary {
    /// The percentage applied to work-use-applicable categories.
    pub percentage: Decimal,
    /// Whether the percentage was static or log-derived.
    pub source: WorkUseSource,
    /// Full log statistics when the percentage was log-derived.
    #[serde(default)]
    pub log_summary: Option<WorkUsePercentageResult>,
}

/// Aggregated totals for a deduction report.
///
/// # Example
///
/// ```
/// use deduction_engine::models::DeductionTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = DeductionTotals {
///     total_amount: Decimal::from_str("2289.00").unwrap(),
///     total_deductible: Decimal::from_str("573.40").unwrap(),
///     expense_count: 3,
///     manual_review_count: 1,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTotals {
    /// Sum of all expense amounts before deduction rules.
    pub total_amount: Decimal,
    /// Sum of all deductible amounts.
    pub total_deductible: Decimal,
    /// Number of expenses processed.
    pub expense_count: usize,
    /// Number of expenses that fell back to manual review.
    pub manual_review_count: usize,
}

/// The complete result of a deduction calculation run.
///
/// One report covers one processing run: a single resolved work-use
/// percentage applied across every expense line.
///
/// # Example
///
/// ```
/// use deduction_engine::models::{DeductionReport, DeductionTotals, WorkUseSource, WorkUseSummary};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let report = DeductionReport {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     work_use: WorkUseSummary {
///         percentage: Decimal::from_str("60").unwrap(),
///         source: WorkUseSource::Static,
///         log_summary: None,
///     },
///     deductions: vec![],
///     totals: DeductionTotals {
///         total_amount: Decimal::ZERO,
///         total_deductible: Decimal::ZERO,
///         expense_count: 0,
///         manual_review_count: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionReport {
    /// Unique identifier for this calculation run.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The work-use percentage applied, with provenance.
    pub work_use: WorkUseSummary,
    /// One deduction result per expense, in request order.
    pub deductions: Vec<DeductionResult>,
    /// Aggregated totals across all deductions.
    pub totals: DeductionTotals,
}
