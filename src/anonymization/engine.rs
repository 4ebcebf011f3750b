//! Sanitization engine
//!
//! The engine runs the fixed ordered rule passes over a single working text.
//! Each pass scans the output of the previous one, so later categories see
//! placeholder tokens instead of the values earlier passes consumed.
//!
//! One call owns one [`AliasAllocator`]; nothing is shared across calls and
//! nothing survives the call. For a fixed input, output text and statistics
//! are fully reproducible.
//!
//! # Examples
//!
//! ```
//! use cloakform::anonymization::SanitizationEngine;
//! use cloakform::config::SanitizationConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = SanitizationEngine::new(&SanitizationConfig::default())?;
//! let result = engine.sanitize("nat_ip = \"35.192.10.55\"")?;
//! assert_eq!(result.text, "nat_ip = \"IP_RANGE_1\"");
//! assert_eq!(result.redaction_count, 1);
//! # Ok(())
//! # }
//! ```

use crate::anonymization::alias::AliasAllocator;
use crate::anonymization::report::SanitizationResult;
use crate::anonymization::rules::RuleSet;
use crate::config::SanitizationConfig;
use anyhow::{Context, Result};

/// Deterministic text-rewriting pass over infrastructure source text
pub struct SanitizationEngine {
    rules: RuleSet,
}

impl SanitizationEngine {
    /// Compile the built-in rule set
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails or a rule pattern
    /// does not compile.
    pub fn new(config: &SanitizationConfig) -> Result<Self> {
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .context("Invalid sanitization configuration")?;

        let rules = RuleSet::builtin(config.max_value_length)
            .context("Failed to compile sanitization rules")?;

        Ok(Self { rules })
    }

    /// Sanitize one text blob
    ///
    /// Blank input short-circuits without running any pass: the text comes
    /// back unchanged with zero counts.
    pub fn sanitize(&self, input: &str) -> Result<SanitizationResult> {
        if input.trim().is_empty() {
            return Ok(SanitizationResult::unchanged(input));
        }

        let mut aliases = AliasAllocator::new();
        let mut text = input.to_string();

        for rule in self.rules.iter() {
            text = rule.apply(&text, &mut aliases)?;
            tracing::trace!(category = %rule.category(), "rule pass complete");
        }

        Ok(SanitizationResult::assemble(text, &aliases))
    }
}
