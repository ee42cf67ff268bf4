//! Rule table types for deduction calculation.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from JSON or YAML rule files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The ATO-sanctioned calculation approach for a category.
///
/// `ImmediateUnderThreshold` and `DepreciateOverThreshold` are two names
/// for the same threshold-gated behavior: at or under the threshold the
/// full work-use amount is claimed immediately, over it the amount is
/// depreciated. Both require `threshold` and `depreciation_years`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimMethod {
    /// Work-use portion of the actual cost is claimed.
    ActualCost,
    /// Threshold-gated: immediate claim at or under the threshold.
    ImmediateUnderThreshold,
    /// Threshold-gated: straight-line depreciation over the threshold.
    DepreciateOverThreshold,
    /// The full amount is claimed regardless of work-use percentage.
    FullDeduction,
    /// No automatic claim; a tax professional must review the expense.
    ManualReview,
}

impl ClaimMethod {
    /// Returns true for the two threshold-gated claim methods.
    pub fn is_threshold_gated(self) -> bool {
        matches!(
            self,
            ClaimMethod::ImmediateUnderThreshold | ClaimMethod::DepreciateOverThreshold
        )
    }
}

/// The declarative rule for one expense category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRule {
    /// The calculation approach for this category.
    pub claim_method: ClaimMethod,
    /// Whether the work-use percentage multiplies the amount. When
    /// false, results report a work-use percentage of 100.
    pub work_use_applicable: bool,
    /// Amount boundary separating immediate deduction from depreciation
    /// (the ATO rule: $300 AUD). Required for threshold-gated methods.
    #[serde(default)]
    pub threshold: Option<Decimal>,
    /// Divisor for amounts over the threshold. Required for
    /// threshold-gated methods.
    #[serde(default)]
    pub depreciation_years: Option<u32>,
    /// Guidance notes passed through to results.
    #[serde(default)]
    pub claim_notes: String,
    /// ATO guidance reference passed through to results unchanged.
    pub ato_reference: String,
    /// Documentation the taxpayer must retain, passed through unchanged.
    #[serde(default)]
    pub required_documentation: Vec<String>,
}

/// Metadata about the rule table.
///
/// Identifies the strategy, the financial year the table applies to,
/// and where the rules were sourced from.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetMetadata {
    /// The human-readable name of the rule table.
    pub name: String,
    /// The strategy name (e.g., "ATO").
    pub strategy: String,
    /// The financial year label the table applies to (e.g., "2024-2025").
    pub financial_year: String,
    /// URL to the official guidance the rules were derived from.
    pub source_url: String,
}

/// The ATO fixed-rate alternative, carried as metadata only.
///
/// The engine always calculates actual-cost deductions; this records
/// the per-hour rate a caller would use instead under the fixed-rate
/// method.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedRateMethod {
    /// The rate per hour worked from home.
    pub hourly_rate: Decimal,
    /// What the fixed rate covers and what records it requires.
    pub description: String,
}

/// The complete category rule table loaded from a rule file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSet {
    /// Rule table metadata.
    pub metadata: RulesetMetadata,
    /// Optional fixed-rate method details.
    #[serde(default)]
    pub fixed_rate_method: Option<FixedRateMethod>,
    /// Map of category name to its rule. Lookups are exact and
    /// case-sensitive.
    pub categories: HashMap<String, CategoryRule>,
}

impl RuleSet {
    /// Looks up the rule for a category by exact, case-sensitive match.
    ///
    /// Absence is not an error: the engine falls back to manual review
    /// for unknown categories.
    pub fn rule(&self, category: &str) -> Option<&CategoryRule> {
        self.categories.get(category)
    }
}
