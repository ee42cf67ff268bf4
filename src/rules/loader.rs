//! Rule table loading functionality.
//!
//! This module provides the [`RuleLoader`] type for loading category
//! rule tables from JSON or YAML files and validating them fail-fast.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CategoryRule, FixedRateMethod, RuleSet, RulesetMetadata};

/// Loads and provides access to a category rule table.
///
/// The `RuleLoader` reads a rule file (JSON or YAML, chosen by file
/// extension), validates every rule once at load time, and provides
/// lookup methods. The table is immutable after loading; share it
/// freely across threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use deduction_engine::rules::RuleLoader;
///
/// let loader = RuleLoader::load("./config/ato/rules.json").unwrap();
/// assert_eq!(loader.metadata().strategy, "ATO");
/// assert!(loader.rule("Electricity").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RuleLoader {
    ruleset: RuleSet,
}

impl RuleLoader {
    /// Loads a rule table from the specified file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML; anything
    /// else is parsed as JSON.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rule file (e.g., "./config/ato/rules.json")
    ///
    /// # Returns
    ///
    /// Returns a `RuleLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file is not valid JSON/YAML for the rule schema
    /// - Any rule fails validation (see [`RuleLoader::from_json_str`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");

        let ruleset: RuleSet = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?
        };

        Self::from_ruleset(ruleset)
    }

    /// Builds a rule table from a JSON string.
    ///
    /// Validation is fail-fast and happens here, never per-lookup:
    /// threshold-gated claim methods must carry both `threshold` and
    /// `depreciation_years`, any present threshold must be positive,
    /// any present `depreciation_years` must be at least 1, and
    /// category names must be non-empty.
    pub fn from_json_str(content: &str) -> EngineResult<Self> {
        let ruleset: RuleSet =
            serde_json::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_ruleset(ruleset)
    }

    /// Builds a rule table from a YAML string.
    ///
    /// Same validation as [`RuleLoader::from_json_str`].
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let ruleset: RuleSet =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_ruleset(ruleset)
    }

    fn from_ruleset(ruleset: RuleSet) -> EngineResult<Self> {
        validate_ruleset(&ruleset)?;
        Ok(Self { ruleset })
    }

    /// Returns the underlying rule table.
    pub fn ruleset(&self) -> &RuleSet {
        &self.ruleset
    }

    /// Looks up the rule for a category by exact, case-sensitive match.
    pub fn rule(&self, category: &str) -> Option<&CategoryRule> {
        self.ruleset.rule(category)
    }

    /// Returns the rule table metadata.
    pub fn metadata(&self) -> &RulesetMetadata {
        &self.ruleset.metadata
    }

    /// Returns the fixed-rate method details, if the table carries them.
    pub fn fixed_rate_method(&self) -> Option<&FixedRateMethod> {
        self.ruleset.fixed_rate_method.as_ref()
    }
}

/// Validates every rule in the table, failing on the first problem.
fn validate_ruleset(ruleset: &RuleSet) -> EngineResult<()> {
    for (name, rule) in &ruleset.categories {
        if name.trim().is_empty() {
            return Err(EngineError::InvalidRuleDefinition {
                category: name.clone(),
                message: "category name cannot be empty".to_string(),
            });
        }

        if let Some(threshold) = rule.threshold {
            if threshold <= Decimal::ZERO {
                return Err(EngineError::InvalidRuleDefinition {
                    category: name.clone(),
                    message: format!("field 'threshold' must be positive, got {}", threshold),
                });
            }
        }

        if rule.depreciation_years == Some(0) {
            return Err(EngineError::InvalidRuleDefinition {
                category: name.clone(),
                message: "field 'depreciation_years' must be at least 1".to_string(),
            });
        }

        if rule.claim_method.is_threshold_gated() {
            if rule.threshold.is_none() {
                return Err(EngineError::InvalidRuleDefinition {
                    category: name.clone(),
                    message: "missing field 'threshold' (required for threshold-gated claim methods)"
                        .to_string(),
                });
            }
            if rule.depreciation_years.is_none() {
                return Err(EngineError::InvalidRuleDefinition {
                    category: name.clone(),
                    message:
                        "missing field 'depreciation_years' (required for threshold-gated claim methods)"
                            .to_string(),
                });
            }
        }
    }

    Ok(())
}
