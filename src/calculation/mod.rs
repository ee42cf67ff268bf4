//! Calculation logic for the Deduction Calculation Engine.
//!
//! This module contains the deduction calculation itself plus the rounding
//! helpers shared across the engine. Each expense is assessed independently
//! against the loaded rule table: work-use apportionment, threshold gating
//! with straight-line depreciation, full deductions, and the manual-review
//! fallback for categories the table does not know.

mod deduction;
mod rounding;

pub use deduction::{
    DEFAULT_DEPRECIATION_YEARS, FALLBACK_ATO_REFERENCE, MANUAL_REVIEW_LABEL, calculate_deduction,
};
pub use rounding::{round_currency, round_percentage};
