//! Request types for the Deduction Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ExpenseRecord;
use crate::worklog::WorkLogDocument;

/// Request body for the `/calculate` endpoint.
///
/// Contains the expense lines to assess plus exactly one work-use source:
/// either a fixed percentage or a daily work-from-home log. Supplying
/// both, or neither, is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The categorized expense lines to assess.
    pub expenses: Vec<ExpenseInput>,
    /// A fixed work-use percentage in the range 0-100.
    #[serde(default)]
    pub work_use_percentage: Option<Decimal>,
    /// A daily work-from-home log to derive the percentage from.
    #[serde(default)]
    pub work_log: Option<WorkLogDocument>,
}

/// One expense line in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseInput {
    /// The expense amount, currency-agnostic.
    pub amount: Decimal,
    /// The category label assigned by the cataloging step.
    pub category: String,
    /// Free-text description from the source invoice line, not used by
    /// the calculation.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ExpenseInput> for ExpenseRecord {
    fn from(input: ExpenseInput) -> Self {
        ExpenseRecord {
            amount: input.amount,
            category: input.category,
        }
    }
}
