//! Deduction result model.
//!
//! This module contains the [`DeductionResult`] type produced by the
//! deduction engine, one per expense record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of applying a category rule to one expense.
///
/// Immutable once produced. The reporting collaborator serializes these
/// verbatim; the engine never revisits them.
///
/// # Example
///
/// ```
/// use deduction_engine::models::DeductionResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = DeductionResult {
///     category: "Electricity".to_string(),
///     total_amount: Decimal::from_str("200.00").unwrap(),
///     work_use_percentage: Decimal::from_str("60").unwrap(),
///     deductible_amount: Decimal::from_str("120.00").unwrap(),
///     claim_method: "Actual Cost Method (60% work use)".to_string(),
///     claim_notes: "Alternative: Fixed Rate Method at $0.70/hour requires time records".to_string(),
///     ato_reference: "Working from Home Expenses".to_string(),
///     required_documentation: vec!["Original invoice".to_string()],
/// };
/// assert_eq!(result.deductible_amount, Decimal::from_str("120.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// The category the expense was calculated under.
    pub category: String,
    /// The full expense amount before any work-use adjustment.
    pub total_amount: Decimal,
    /// The work-use percentage as applied. Forced to 100 for categories
    /// where the percentage does not apply.
    pub work_use_percentage: Decimal,
    /// The claimable amount, rounded to 2 decimal places
    /// (half away from zero). Per-year figure for depreciated assets.
    /// Full-deduction claims carry the expense amount through exactly,
    /// so sub-cent input precision survives there.
    pub deductible_amount: Decimal,
    /// Human-readable claim method label, e.g.
    /// "Actual Cost Method (60% work use)".
    pub claim_method: String,
    /// Guidance notes for the claim, composed from the rule's notes plus
    /// any branch-specific prefix (work-use portion, depreciation).
    pub claim_notes: String,
    /// The ATO guidance reference for the category, passed through
    /// unchanged from the rule.
    pub ato_reference: String,
    /// Documentation the taxpayer must retain, passed through unchanged
    /// from the rule.
    pub required_documentation: Vec<String>,
}
