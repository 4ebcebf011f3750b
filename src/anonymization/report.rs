//! Result assembly and run reporting
//!
//! [`SanitizationResult`] is the record handed to callers: the sanitized
//! text, the total distinct-value count and the per-category counts. It is
//! assembled from the allocator's final state without rescanning the text.

use crate::anonymization::alias::AliasAllocator;
use crate::anonymization::models::SensitiveCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Output of one sanitize invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizationResult {
    /// Sanitized text; the exact payload forwarded for external analysis
    pub text: String,

    /// Total distinct aliased values. Hard-redacted secrets do not count.
    pub redaction_count: usize,

    /// Distinct-value count per category; zero-match categories are absent
    pub types: HashMap<SensitiveCategory, usize>,
}

impl SanitizationResult {
    /// Pass-through result for blank input
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            redaction_count: 0,
            types: HashMap::new(),
        }
    }

    /// Assemble the final record from the allocator's state
    pub fn assemble(text: String, aliases: &AliasAllocator) -> Self {
        Self {
            text,
            redaction_count: aliases.redaction_count(),
            types: aliases.counts_by_category(),
        }
    }

    /// One-line summary for live feedback in an editor surface
    pub fn summary_line(&self) -> String {
        match self.redaction_count {
            0 => "No sensitive values detected".to_string(),
            1 => "Redacted 1 sensitive value".to_string(),
            n => format!("Redacted {n} sensitive values"),
        }
    }

    /// Format the run summary for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("───────────────────────────────────────────\n");
        output.push_str("           SANITIZATION SUMMARY\n");
        output.push_str("───────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Distinct values aliased: {}\n",
            self.redaction_count
        ));

        if !self.types.is_empty() {
            let mut categories: Vec<_> = self.types.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.label().cmp(b.0.label())));

            output.push('\n');
            for (category, count) in categories {
                output.push_str(&format!("  {:25} {:>5}\n", category.label(), count));
            }
        }

        output.push_str("───────────────────────────────────────────\n");
        output
    }

    /// Serialize the full record as pretty JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
