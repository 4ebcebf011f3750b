//! Sensitive-data anonymization for infrastructure source text
//!
//! This module rewrites infrastructure-as-code text before it leaves the
//! local environment: secrets are destroyed, structural identifiers are
//! replaced with stable placeholder tokens, and a small set of
//! security-relevant literals is left untouched so an external reviewer can
//! still reason about topology.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Rules**: a fixed ordered list of category passes (pattern + scope + action)
//! - **Aliasing**: stable `CATEGORY_n` placeholders per distinct value
//! - **Ignore list**: literal values exempt from any transformation
//! - **Report**: sanitized text plus redaction statistics
//! - **Audit**: opt-in append-only run log with hashed input
//!
//! # Usage
//!
//! ```
//! use cloakform::anonymization::SanitizationEngine;
//! use cloakform::config::SanitizationConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = SanitizationEngine::new(&SanitizationConfig::default())?;
//! let result = engine.sanitize("api_key = \"AIzaSyB-secret\"")?;
//! assert_eq!(result.text, "api_key = \"[REDACTED_SECRET]\"");
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod audit;
pub mod engine;
pub mod ignore;
pub mod models;
pub mod report;
pub mod rules;

// Re-export main types
pub use alias::AliasAllocator;
pub use engine::SanitizationEngine;
pub use ignore::IgnoreList;
pub use models::{SensitiveCategory, SECRET_PLACEHOLDER};
pub use report::SanitizationResult;
pub use rules::RuleSet;
