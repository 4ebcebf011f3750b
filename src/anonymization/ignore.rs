//! Exemption list for values that must stay visible
//!
//! Some sensitive-looking values are load-bearing for downstream security
//! analysis: a wide-open source range, a default network, a standard region
//! name. Hiding them would destroy exactly the signal an auditor needs, so
//! they are exempt from every transformation.

use std::collections::HashSet;

/// Literal values exempt from aliasing, matched case-insensitively
const EXEMPT_VALUES: &[&str] = &[
    "0.0.0.0",
    "0.0.0.0/0",
    "::/0",
    "default",
    "standard",
    "enforced",
    "global",
    "us-central1",
    "us-east1",
    "us-east4",
    "us-west1",
    "us-west2",
    "europe-west1",
    "europe-west2",
    "europe-north1",
    "asia-east1",
    "asia-northeast1",
    "asia-south1",
    "australia-southeast1",
];

/// Static set of literal values that short-circuit aliasing
#[derive(Debug, Clone)]
pub struct IgnoreList {
    values: HashSet<&'static str>,
}

impl IgnoreList {
    /// Build the built-in exemption set
    pub fn builtin() -> Self {
        Self {
            values: EXEMPT_VALUES.iter().copied().collect(),
        }
    }

    /// Exact-match check, case-insensitive. The set stores lowercase
    /// literals, so the candidate is lowercased before lookup.
    pub fn is_exempt(&self, value: &str) -> bool {
        self.values.contains(value.to_lowercase().as_str())
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_range_is_exempt() {
        let list = IgnoreList::builtin();
        assert!(list.is_exempt("0.0.0.0/0"));
        assert!(list.is_exempt("::/0"));
    }

    #[test]
    fn test_exemption_is_case_insensitive() {
        let list = IgnoreList::builtin();
        assert!(list.is_exempt("Default"));
        assert!(list.is_exempt("ENFORCED"));
        assert!(list.is_exempt("US-Central1"));
    }

    #[test]
    fn test_exemption_is_exact_match() {
        let list = IgnoreList::builtin();
        assert!(!list.is_exempt("defaults"));
        assert!(!list.is_exempt("my-default-vpc"));
        assert!(!list.is_exempt("10.0.0.0/8"));
    }
}
