//! Category rule table loading and management.
//!
//! This module provides the declarative rule table that drives deduction
//! calculation: one rule per expense category, loaded once from a JSON
//! or YAML file and validated fail-fast.
//!
//! # Example
//!
//! ```no_run
//! use deduction_engine::rules::RuleLoader;
//!
//! let rules = RuleLoader::load("./config/ato/rules.json").unwrap();
//! println!("Loaded rule table: {}", rules.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::RuleLoader;
pub use types::{CategoryRule, ClaimMethod, FixedRateMethod, RuleSet, RulesetMetadata};
