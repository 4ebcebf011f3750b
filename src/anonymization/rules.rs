//! Category rule registry
//!
//! Each sensitive-data category is described by one [`RedactionRule`]: a
//! compiled pattern, a scope (whole-text or key-scoped) and an action. The
//! rules form a fixed ordered list; pass order is a correctness requirement
//! because later passes scan text that already contains placeholder tokens
//! from earlier ones.

use crate::anonymization::alias::AliasAllocator;
use crate::anonymization::models::{
    is_placeholder, RuleAction, SensitiveCategory, SECRET_PLACEHOLDER,
};
use anyhow::{Context, Result};

/// RFC-shaped email address, length-bounded on both sides of the `@`
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]{1,64}@[A-Za-z0-9.-]{1,255}\.[A-Za-z]{2,24}\b";

/// IPv4 dotted-quad with optional CIDR prefix
const IP_PATTERN: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}(?:/\d{1,2})?\b";

/// The wide-open ranges stay visible; they are the finding, not the secret
const IP_EXCLUDES: &[&str] = &["0.0.0.0", "0.0.0.0/0"];

/// Environment/tier words; a key-scoped value containing any of these is
/// aliased in full
const TIER_WORDS_PATTERN: &str =
    r"(?i)prod|production|master|primary|main|staging|stg|dev|development|test|uat|dr|backup|secondary";

const CLOUD_ID_KEYS: &[&str] = &[
    "project",
    "project_id",
    "org_id",
    "billing_account",
    "folder_id",
    "service_account_id",
    "account_id",
];

const RESOURCE_NAME_KEYS: &[&str] = &[
    "bucket",
    "bucket_name",
    "database_instance",
    "instance_name",
    "repository_id",
    "container_name",
];

const NETWORK_TOPOGRAPHY_KEYS: &[&str] =
    &["network", "subnetwork", "vpc", "dns_name", "domain_name"];

const SECRET_KEYS: &[&str] = &[
    "password",
    "secret",
    "key_data",
    "private_key",
    "api_key",
    "token",
    "access_key",
    "auth_token",
    "certificate",
    "connection_string",
];

const ORG_METADATA_KEYS: &[&str] = &[
    "owner",
    "creator",
    "contact",
    "team",
    "cost_center",
    "business_unit",
];

const ENV_INDICATOR_KEYS: &[&str] =
    &["name", "labels", "tags", "env", "environment", "tier", "role"];

/// One category pass: scope, compiled pattern, action
pub struct RedactionRule {
    category: SensitiveCategory,
    action: RuleAction,
    matcher: RuleMatcher,
}

enum RuleMatcher {
    /// Scan the entire text; every match is the candidate value
    Text {
        pattern: regex::Regex,
        excludes: &'static [&'static str],
    },
    /// Scan for listed keys; the quoted right-hand side is the candidate.
    /// `value_filter` restricts the rule to values matching it.
    KeyValue {
        pattern: fancy_regex::Regex,
        value_filter: Option<regex::Regex>,
    },
}

impl RedactionRule {
    fn whole_text(
        category: SensitiveCategory,
        pattern: &str,
        excludes: &'static [&'static str],
    ) -> Result<Self> {
        let pattern = regex::Regex::new(pattern)
            .with_context(|| format!("invalid whole-text pattern for {category}"))?;
        Ok(Self {
            category,
            action: RuleAction::Alias,
            matcher: RuleMatcher::Text { pattern, excludes },
        })
    }

    fn key_scoped(
        category: SensitiveCategory,
        action: RuleAction,
        keys: &[&str],
        max_value_length: usize,
        value_filter: Option<&str>,
    ) -> Result<Self> {
        let pattern = fancy_regex::Regex::new(&key_value_pattern(keys, max_value_length))
            .with_context(|| format!("invalid key-scoped pattern for {category}"))?;
        let value_filter = value_filter
            .map(regex::Regex::new)
            .transpose()
            .with_context(|| format!("invalid value filter for {category}"))?;
        Ok(Self {
            category,
            action,
            matcher: RuleMatcher::KeyValue {
                pattern,
                value_filter,
            },
        })
    }

    /// Category this rule redacts
    pub fn category(&self) -> SensitiveCategory {
        self.category
    }

    /// Apply this rule as a global substitution over `text`
    pub fn apply(&self, text: &str, aliases: &mut AliasAllocator) -> Result<String> {
        match &self.matcher {
            RuleMatcher::Text { pattern, excludes } => Ok(pattern
                .replace_all(text, |caps: &regex::Captures<'_>| {
                    let value = &caps[0];
                    if excludes.contains(&value) {
                        value.to_string()
                    } else {
                        aliases.alias_for(self.category, value)
                    }
                })
                .into_owned()),
            RuleMatcher::KeyValue {
                pattern,
                value_filter,
            } => self.apply_key_scoped(pattern, value_filter.as_ref(), text, aliases),
        }
    }

    /// Key-scoped substitution. The key, operator and quote characters are
    /// copied through verbatim; only the value span is replaced.
    fn apply_key_scoped(
        &self,
        pattern: &fancy_regex::Regex,
        value_filter: Option<&regex::Regex>,
        text: &str,
        aliases: &mut AliasAllocator,
    ) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for caps in pattern.captures_iter(text) {
            let caps = caps.with_context(|| format!("{} value scan failed", self.category))?;
            let (Some(whole), Some(key), Some(op), Some(quote), Some(value)) = (
                caps.get(0),
                caps.get(1),
                caps.get(2),
                caps.get(3),
                caps.get(4),
            ) else {
                continue;
            };

            let replacement = match self.action {
                RuleAction::HardRedact => Some(SECRET_PLACEHOLDER.to_string()),
                RuleAction::Alias => {
                    let value = value.as_str();
                    if is_placeholder(value)
                        || value_filter.is_some_and(|filter| !filter.is_match(value))
                    {
                        None
                    } else {
                        Some(aliases.alias_for(self.category, value))
                    }
                }
            };

            output.push_str(&text[last..whole.start()]);
            match replacement {
                Some(replacement) => {
                    output.push_str(key.as_str());
                    output.push_str(op.as_str());
                    output.push_str(quote.as_str());
                    output.push_str(&replacement);
                    output.push_str(quote.as_str());
                }
                None => output.push_str(whole.as_str()),
            }
            last = whole.end();
        }

        output.push_str(&text[last..]);
        Ok(output)
    }
}

/// Build the key-scoped capture pattern: a word-bounded key from the list,
/// an assignment operator with its spacing, and a quoted value closed by the
/// same quote character (the backreference is why these rules compile with
/// fancy-regex). A `_` in a listed key also matches `-`, so `api_key`
/// covers `api-key`. Values longer than the bound are left alone.
fn key_value_pattern(keys: &[&str], max_value_length: usize) -> String {
    let mut alternates: Vec<String> = keys.iter().map(|key| key.replace('_', "[_-]")).collect();
    alternates.sort_by_key(|key| std::cmp::Reverse(key.len()));
    format!(
        r#"\b({keys})([ \t]*[:=][ \t]*)(["'])((?:(?!\3)[^\r\n]){{1,{max_value_length}}}?)\3"#,
        keys = alternates.join("|"),
    )
}

/// The fixed ordered rule list
pub struct RuleSet {
    rules: Vec<RedactionRule>,
}

impl RuleSet {
    /// Compile the built-in rules in their required pass order:
    /// Identity, IP_Range, Cloud_ID, Resource_Name, Network_Topography,
    /// Secret, Org_Metadata, Env_Indicator.
    pub fn builtin(max_value_length: usize) -> Result<Self> {
        use RuleAction::{Alias, HardRedact};
        use SensitiveCategory as Cat;

        let rules = vec![
            RedactionRule::whole_text(Cat::Identity, EMAIL_PATTERN, &[])?,
            RedactionRule::whole_text(Cat::IpRange, IP_PATTERN, IP_EXCLUDES)?,
            RedactionRule::key_scoped(Cat::CloudId, Alias, CLOUD_ID_KEYS, max_value_length, None)?,
            RedactionRule::key_scoped(
                Cat::ResourceName,
                Alias,
                RESOURCE_NAME_KEYS,
                max_value_length,
                None,
            )?,
            RedactionRule::key_scoped(
                Cat::NetworkTopography,
                Alias,
                NETWORK_TOPOGRAPHY_KEYS,
                max_value_length,
                None,
            )?,
            RedactionRule::key_scoped(Cat::Secret, HardRedact, SECRET_KEYS, max_value_length, None)?,
            RedactionRule::key_scoped(
                Cat::OrgMetadata,
                Alias,
                ORG_METADATA_KEYS,
                max_value_length,
                None,
            )?,
            RedactionRule::key_scoped(
                Cat::EnvIndicator,
                Alias,
                ENV_INDICATOR_KEYS,
                max_value_length,
                Some(TIER_WORDS_PATTERN),
            )?,
        ];

        Ok(Self { rules })
    }

    /// Rules in pass order
    pub fn iter(&self) -> std::slice::Iter<'_, RedactionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rule_for(category: SensitiveCategory) -> RedactionRule {
        RuleSet::builtin(256)
            .unwrap()
            .rules
            .into_iter()
            .find(|r| r.category() == category)
            .unwrap()
    }

    #[test]
    fn test_builtin_pass_order() {
        let rules = RuleSet::builtin(256).unwrap();
        let order: Vec<_> = rules.iter().map(RedactionRule::category).collect();
        assert_eq!(
            order,
            vec![
                SensitiveCategory::Identity,
                SensitiveCategory::IpRange,
                SensitiveCategory::CloudId,
                SensitiveCategory::ResourceName,
                SensitiveCategory::NetworkTopography,
                SensitiveCategory::Secret,
                SensitiveCategory::OrgMetadata,
                SensitiveCategory::EnvIndicator,
            ]
        );
    }

    #[test]
    fn test_email_pass_rewrites_whole_text() {
        let rule = rule_for(SensitiveCategory::Identity);
        let mut aliases = AliasAllocator::new();
        let out = rule
            .apply("contact admin@corp.io or ops@corp.io, then admin@corp.io", &mut aliases)
            .unwrap();
        assert_eq!(out, "contact IDENTITY_1 or IDENTITY_2, then IDENTITY_1");
    }

    #[test]
    fn test_ip_pass_skips_open_range() {
        let rule = rule_for(SensitiveCategory::IpRange);
        let mut aliases = AliasAllocator::new();
        let out = rule
            .apply(
                "nat_ip = \"35.192.10.55\"\nsource_ranges = [\"0.0.0.0/0\"]",
                &mut aliases,
            )
            .unwrap();
        assert_eq!(
            out,
            "nat_ip = \"IP_RANGE_1\"\nsource_ranges = [\"0.0.0.0/0\"]"
        );
        assert_eq!(aliases.redaction_count(), 1);
    }

    #[test_case("project = \"acme-prod-4711\"", "project = \"CLOUD_ID_1\"" ; "hcl equals")]
    #[test_case("project: \"acme-prod-4711\"", "project: \"CLOUD_ID_1\"" ; "yaml colon")]
    #[test_case("project   =   'acme-prod-4711'", "project   =   'CLOUD_ID_1'" ; "spacing and single quotes")]
    fn test_key_scoped_preserves_surroundings(input: &str, expected: &str) {
        let rule = rule_for(SensitiveCategory::CloudId);
        let mut aliases = AliasAllocator::new();
        assert_eq!(rule.apply(input, &mut aliases).unwrap(), expected);
    }

    #[test]
    fn test_key_must_immediately_precede_operator() {
        // `owner-email` is not the `owner` key; the email pass handles the
        // value instead.
        let rule = rule_for(SensitiveCategory::OrgMetadata);
        let mut aliases = AliasAllocator::new();
        let input = "owner-email = \"a@b.com\"";
        assert_eq!(rule.apply(input, &mut aliases).unwrap(), input);
        assert_eq!(aliases.redaction_count(), 0);
    }

    #[test]
    fn test_hyphenated_key_variant_matches() {
        let rule = rule_for(SensitiveCategory::Secret);
        let mut aliases = AliasAllocator::new();
        let out = rule
            .apply("api-key = \"AIzaSyB-secret\"", &mut aliases)
            .unwrap();
        assert_eq!(out, "api-key = \"[REDACTED_SECRET]\"");
        assert_eq!(aliases.redaction_count(), 0);
    }

    #[test]
    fn test_env_filter_requires_tier_word() {
        let rule = rule_for(SensitiveCategory::EnvIndicator);
        let mut aliases = AliasAllocator::new();
        let out = rule
            .apply(
                "name = \"billing-prod-vm\"\nname = \"plain-label\"",
                &mut aliases,
            )
            .unwrap();
        assert_eq!(out, "name = \"ENV_INDICATOR_1\"\nname = \"plain-label\"");
    }

    #[test]
    fn test_alias_pass_skips_placeholder_values() {
        let rule = rule_for(SensitiveCategory::NetworkTopography);
        let mut aliases = AliasAllocator::new();
        let input = "network = \"NETWORK_TOPOGRAPHY_1\"";
        assert_eq!(rule.apply(input, &mut aliases).unwrap(), input);
        assert_eq!(aliases.redaction_count(), 0);
    }

    #[test]
    fn test_overlong_value_is_left_alone() {
        let rule = rule_for(SensitiveCategory::ResourceName);
        let mut aliases = AliasAllocator::new();
        let input = format!("bucket = \"{}\"", "x".repeat(300));
        assert_eq!(rule.apply(&input, &mut aliases).unwrap(), input);
        assert_eq!(aliases.redaction_count(), 0);
    }

    #[test]
    fn test_mismatched_quotes_do_not_match() {
        let rule = rule_for(SensitiveCategory::CloudId);
        let mut aliases = AliasAllocator::new();
        let input = "project = \"acme-prod'";
        assert_eq!(rule.apply(input, &mut aliases).unwrap(), input);
    }
}
