//! Expense record model.
//!
//! This module defines the ExpenseRecord struct representing one
//! categorized expense line supplied by the cataloging collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a single categorized expense line.
///
/// Records are produced upstream (one per invoice line), are immutable,
/// and are consumed once by the deduction engine. The amount is
/// currency-agnostic; the source system always supplies AUD.
///
/// # Example
///
/// ```
/// use deduction_engine::models::ExpenseRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let expense = ExpenseRecord {
///     amount: Decimal::from_str("200.00").unwrap(),
///     category: "Electricity".to_string(),
/// };
/// assert_eq!(expense.category, "Electricity");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// The expense amount. Must be non-negative; negative amounts are
    /// rejected at calculation time, never clamped.
    pub amount: Decimal,
    /// The category label assigned by the categorization collaborator.
    /// May be any string; unknown categories fall back to manual review.
    pub category: String,
}
