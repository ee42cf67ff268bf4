//! Application state for the Deduction Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::rules::RuleLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded category rule table.
#[derive(Clone)]
pub struct AppState {
    /// The loaded category rule table.
    rules: Arc<RuleLoader>,
}

impl AppState {
    /// Creates a new application state with the given rule loader.
    pub fn new(rules: RuleLoader) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the rule loader.
    pub fn rules(&self) -> &RuleLoader {
        &self.rules
    }
}
