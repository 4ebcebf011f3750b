//! Stable placeholder allocation
//!
//! The allocator owns all mutable state of one sanitize invocation: the
//! alias table and the per-category counters. It is created fresh per call
//! and discarded with it; nothing is shared across invocations.

use crate::anonymization::ignore::IgnoreList;
use crate::anonymization::models::SensitiveCategory;
use std::collections::HashMap;

/// Assigns sequential `CATEGORY_n` placeholders to distinct sensitive values.
///
/// The table is keyed category -> value -> alias. Value comparison is
/// case-sensitive while the exemption check is case-insensitive; two values
/// differing only in case therefore receive separate aliases. Downstream
/// consumers rely on the existing numbering, so this asymmetry is kept as-is.
#[derive(Debug, Default)]
pub struct AliasAllocator {
    ignore: IgnoreList,
    entries: HashMap<SensitiveCategory, HashMap<String, String>>,
}

impl AliasAllocator {
    /// Create an empty allocator with the built-in exemption list
    pub fn new() -> Self {
        Self {
            ignore: IgnoreList::builtin(),
            entries: HashMap::new(),
        }
    }

    /// Return the stable alias for `value` within `category`, allocating the
    /// next sequential index on first encounter. Exempt values are returned
    /// unchanged and never enter the table.
    pub fn alias_for(&mut self, category: SensitiveCategory, value: &str) -> String {
        if self.ignore.is_exempt(value) {
            return value.to_string();
        }

        let table = self.entries.entry(category).or_default();
        if let Some(alias) = table.get(value) {
            return alias.clone();
        }

        let alias = format!("{}_{}", category.label(), table.len() + 1);
        table.insert(value.to_string(), alias.clone());
        alias
    }

    /// Total distinct aliased values across all categories
    pub fn redaction_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Distinct-value count per category; categories with zero matches are
    /// absent from the map
    pub fn counts_by_category(&self) -> HashMap<SensitiveCategory, usize> {
        self.entries
            .iter()
            .filter(|(_, table)| !table.is_empty())
            .map(|(category, table)| (*category, table.len()))
            .collect()
    }
}
