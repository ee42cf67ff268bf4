//! Deduction calculation functionality.
//!
//! Maps one categorized expense plus a resolved work-use percentage to a
//! deduction result using the category's declarative rule: work-use
//! apportionment, threshold gating with straight-line depreciation, and
//! a manual-review fallback for categories the rule table does not know.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionResult, ExpenseRecord};
use crate::rules::{CategoryRule, ClaimMethod, RuleSet};

use super::rounding::round_currency;

/// Claim method label reported when an expense needs professional review.
pub const MANUAL_REVIEW_LABEL: &str = "Manual Review Required";

/// ATO reference reported for categories with no rule in the table.
pub const FALLBACK_ATO_REFERENCE: &str = "Other Operating Expenses";

/// Straight-line years used when a hand-built rule omits the field.
///
/// Rule tables that come through [`crate::rules::RuleLoader`] always carry
/// `depreciation_years` on threshold-gated rules, so this only applies to
/// rule sets constructed directly in code.
pub const DEFAULT_DEPRECIATION_YEARS: u32 = 3;

/// Calculates the deductible amount for a single work-related expense.
///
/// The expense's category selects a rule from the table. The rule's claim
/// method then determines how the deductible amount is derived:
///
/// - `actual_cost`: the work-use portion of the amount.
/// - `immediate_under_threshold` / `depreciate_over_threshold`: the
///   work-use portion, claimed immediately when the full amount is at or
///   under the rule's threshold, otherwise spread over the rule's
///   depreciation period (the result is the per-year claim).
/// - `full_deduction`: the full amount, with work use reported as 100%.
/// - `manual_review`: a zero deductible pending professional review.
///
/// A category with no rule never fails: it falls back to a zero-amount
/// manual-review result so one unrecognized expense cannot abort a batch.
///
/// # Arguments
///
/// * `expense` - The expense to assess
/// * `work_use_percentage` - Work-use percentage in the range 0-100
/// * `ruleset` - The rule table to dispatch on
///
/// # Returns
///
/// * `Ok(DeductionResult)` - The deduction outcome for this expense
/// * `Err(EngineError::InvalidExpenseAmount)` - If the amount is negative
///
/// # Example
///
/// ```
/// use deduction_engine::calculation::calculate_deduction;
/// use deduction_engine::models::ExpenseRecord;
/// use deduction_engine::rules::RuleLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = RuleLoader::load("./config/ato/rules.json").unwrap();
/// let expense = ExpenseRecord {
///     amount: Decimal::from_str("200.00").unwrap(),
///     category: "Electricity".to_string(),
/// };
///
/// let result =
///     calculate_deduction(&expense, Decimal::from(60), rules.ruleset()).unwrap();
/// assert_eq!(result.deductible_amount, Decimal::from_str("120.00").unwrap());
/// assert_eq!(result.claim_method, "Actual Cost Method (60% work use)");
/// ```
pub fn calculate_deduction(
    expense: &ExpenseRecord,
    work_use_percentage: Decimal,
    ruleset: &RuleSet,
) -> EngineResult<DeductionResult> {
    if expense.amount < Decimal::ZERO {
        return Err(EngineError::InvalidExpenseAmount {
            amount: expense.amount,
        });
    }

    let Some(rule) = ruleset.rule(&expense.category) else {
        return Ok(manual_review_fallback(expense, work_use_percentage));
    };

    // Work-use apportionment, kept unrounded so each branch rounds its
    // final figure exactly once. Categories where work use does not apply
    // are claimed in full and reported at 100%.
    let (effective_amount, reported_percentage) = if rule.work_use_applicable {
        let portion = expense.amount * work_use_percentage / Decimal::from(100);
        (portion, work_use_percentage)
    } else {
        (expense.amount, Decimal::from(100))
    };

    let result = match rule.claim_method {
        ClaimMethod::ActualCost => DeductionResult {
            category: expense.category.clone(),
            total_amount: expense.amount,
            work_use_percentage: reported_percentage,
            deductible_amount: round_currency(effective_amount),
            claim_method: actual_cost_label(rule, reported_percentage),
            claim_notes: rule.claim_notes.clone(),
            ato_reference: rule.ato_reference.clone(),
            required_documentation: rule.required_documentation.clone(),
        },
        ClaimMethod::ImmediateUnderThreshold | ClaimMethod::DepreciateOverThreshold => {
            threshold_gated_deduction(expense, rule, effective_amount, reported_percentage)
        }
        // The full amount passes through exactly, never rounded, so the
        // result always equals the expense amount to the digit.
        ClaimMethod::FullDeduction => DeductionResult {
            category: expense.category.clone(),
            total_amount: expense.amount,
            work_use_percentage: reported_percentage,
            deductible_amount: expense.amount,
            claim_method: "Full Deduction (100%)".to_string(),
            claim_notes: rule.claim_notes.clone(),
            ato_reference: rule.ato_reference.clone(),
            required_documentation: rule.required_documentation.clone(),
        },
        ClaimMethod::ManualReview => DeductionResult {
            category: expense.category.clone(),
            total_amount: expense.amount,
            work_use_percentage: reported_percentage,
            deductible_amount: round_currency(Decimal::ZERO),
            claim_method: MANUAL_REVIEW_LABEL.to_string(),
            claim_notes: rule.claim_notes.clone(),
            ato_reference: rule.ato_reference.clone(),
            required_documentation: rule.required_documentation.clone(),
        },
    };

    Ok(result)
}

/// Applies the $threshold gate shared by the two threshold claim methods.
///
/// The gate compares the full expense amount (not the work-use portion)
/// against the threshold, inclusive: an amount exactly at the threshold is
/// claimed immediately. `effective_amount` arrives unrounded; each branch
/// rounds its final figure once.
fn threshold_gated_deduction(
    expense: &ExpenseRecord,
    rule: &CategoryRule,
    effective_amount: Decimal,
    reported_percentage: Decimal,
) -> DeductionResult {
    // Loader validation guarantees the threshold for tables it produced;
    // hand-built tables fall back to the ATO instant-asset figure.
    let threshold = rule.threshold.unwrap_or_else(|| Decimal::from(300));

    if expense.amount <= threshold {
        let claim_notes =
            if rule.work_use_applicable && reported_percentage < Decimal::from(100) {
                compose_notes(
                    format!(
                        "Work-related portion only ({}%).",
                        reported_percentage.normalize()
                    ),
                    &rule.claim_notes,
                )
            } else {
                rule.claim_notes.clone()
            };

        DeductionResult {
            category: expense.category.clone(),
            total_amount: expense.amount,
            work_use_percentage: reported_percentage,
            deductible_amount: round_currency(effective_amount),
            claim_method: format!("Immediate Deduction (Under ${})", threshold_label(threshold)),
            claim_notes,
            ato_reference: rule.ato_reference.clone(),
            required_documentation: rule.required_documentation.clone(),
        }
    } else {
        let years = rule
            .depreciation_years
            .unwrap_or(DEFAULT_DEPRECIATION_YEARS);
        let per_year = round_currency(effective_amount / Decimal::from(years));

        DeductionResult {
            category: expense.category.clone(),
            total_amount: expense.amount,
            work_use_percentage: reported_percentage,
            deductible_amount: per_year,
            claim_method: format!(
                "Decline in Value (Over ${} - Depreciation)",
                threshold_label(threshold)
            ),
            claim_notes: compose_notes(
                format!(
                    "Depreciated over {} years; amount is the per-year claim, not the full work-use amount.",
                    years
                ),
                &rule.claim_notes,
            ),
            ato_reference: rule.ato_reference.clone(),
            required_documentation: rule.required_documentation.clone(),
        }
    }
}

/// Renders a threshold for the claim method labels.
///
/// Whole-dollar thresholds drop the cents ("$300"); fractional ones read
/// as currency ("$300.50"), never as a bare decimal.
fn threshold_label(threshold: Decimal) -> String {
    if threshold.is_integer() {
        threshold.normalize().to_string()
    } else {
        round_currency(threshold).to_string()
    }
}

/// Builds the actual-cost claim method label.
///
/// The work-use suffix only appears when a partial percentage actually
/// applied, so a 100% claim reads as plain "Actual Cost Method".
fn actual_cost_label(rule: &CategoryRule, reported_percentage: Decimal) -> String {
    if rule.work_use_applicable && reported_percentage < Decimal::from(100) {
        format!(
            "Actual Cost Method ({}% work use)",
            reported_percentage.normalize()
        )
    } else {
        "Actual Cost Method".to_string()
    }
}

/// Result for a category the rule table does not recognize.
///
/// Unknown categories are reported rather than rejected: the deductible
/// amount is zero and the caller's work-use percentage is passed through
/// so the record stays traceable in the report.
fn manual_review_fallback(expense: &ExpenseRecord, work_use_percentage: Decimal) -> DeductionResult {
    DeductionResult {
        category: expense.category.clone(),
        total_amount: expense.amount,
        work_use_percentage,
        deductible_amount: round_currency(Decimal::ZERO),
        claim_method: MANUAL_REVIEW_LABEL.to_string(),
        claim_notes: format!(
            "No rule found for category '{}'; consult tax professional",
            expense.category
        ),
        ato_reference: FALLBACK_ATO_REFERENCE.to_string(),
        required_documentation: vec![
            "Full documentation".to_string(),
            "Professional advice".to_string(),
        ],
    }
}

/// Joins a branch-specific note with the rule's own claim notes.
fn compose_notes(prefix: String, rule_notes: &str) -> String {
    if rule_notes.is_empty() {
        prefix
    } else {
        format!("{} {}", prefix, rule_notes)
    }
}
