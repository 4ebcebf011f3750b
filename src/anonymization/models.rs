//! Sensitive-data category models

use serde::{Deserialize, Serialize};

/// Literal substituted for every value under a Secret key. The original
/// value is not recoverable from the output.
pub const SECRET_PLACEHOLDER: &str = "[REDACTED_SECRET]";

/// Sensitive-data category enumeration covering the identifier classes found
/// in infrastructure source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensitiveCategory {
    /// Email addresses
    Identity,
    /// IPv4 addresses and CIDR ranges
    #[serde(rename = "IP_Range")]
    IpRange,
    /// Project, organization, billing and account identifiers
    #[serde(rename = "Cloud_ID")]
    CloudId,
    /// Buckets, database instances, repositories, containers
    #[serde(rename = "Resource_Name")]
    ResourceName,
    /// VPCs, subnets, DNS and domain names
    #[serde(rename = "Network_Topography")]
    NetworkTopography,
    /// Credentials - never aliased, always hard-redacted
    Secret,
    /// Owner, team and cost-center labels
    #[serde(rename = "Org_Metadata")]
    OrgMetadata,
    /// Environment/tier words embedded in broader labels
    #[serde(rename = "Env_Indicator")]
    EnvIndicator,
}

impl SensitiveCategory {
    /// Uppercase label used as the alias prefix (`IDENTITY_1`, `IP_RANGE_2`, ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identity => "IDENTITY",
            Self::IpRange => "IP_RANGE",
            Self::CloudId => "CLOUD_ID",
            Self::ResourceName => "RESOURCE_NAME",
            Self::NetworkTopography => "NETWORK_TOPOGRAPHY",
            Self::Secret => "SECRET",
            Self::OrgMetadata => "ORG_METADATA",
            Self::EnvIndicator => "ENV_INDICATOR",
        }
    }

    /// Whether values in this category are aliased (stable placeholder per
    /// distinct value) rather than destroyed
    pub fn is_aliased(&self) -> bool {
        !matches!(self, Self::Secret)
    }
}

impl std::fmt::Display for SensitiveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Action a rule applies to a captured value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Replace with a stable `CATEGORY_n` placeholder
    Alias,
    /// Replace with [`SECRET_PLACEHOLDER`], irreversibly
    HardRedact,
}

/// Recognizes placeholder tokens emitted by earlier passes (or a previous
/// run), so aliasing never re-triggers on its own output.
pub fn is_placeholder(value: &str) -> bool {
    if value == SECRET_PLACEHOLDER {
        return true;
    }
    let Some((prefix, suffix)) = value.rsplit_once('_') else {
        return false;
    };
    !prefix.is_empty()
        && !suffix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == '_')
        && suffix.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_upper_snake() {
        for category in [
            SensitiveCategory::Identity,
            SensitiveCategory::IpRange,
            SensitiveCategory::CloudId,
            SensitiveCategory::ResourceName,
            SensitiveCategory::NetworkTopography,
            SensitiveCategory::Secret,
            SensitiveCategory::OrgMetadata,
            SensitiveCategory::EnvIndicator,
        ] {
            assert!(category
                .label()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_secret_is_not_aliased() {
        assert!(!SensitiveCategory::Secret.is_aliased());
        assert!(SensitiveCategory::Identity.is_aliased());
    }

    #[test]
    fn test_serde_labels_use_display_casing() {
        let json = serde_json::to_string(&SensitiveCategory::NetworkTopography).unwrap();
        assert_eq!(json, "\"Network_Topography\"");
        let json = serde_json::to_string(&SensitiveCategory::Identity).unwrap();
        assert_eq!(json, "\"Identity\"");
    }

    #[test]
    fn test_is_placeholder() {
        assert!(is_placeholder("IDENTITY_1"));
        assert!(is_placeholder("NETWORK_TOPOGRAPHY_12"));
        assert!(is_placeholder("[REDACTED_SECRET]"));
        assert!(!is_placeholder("prod-secure-vpc"));
        assert!(!is_placeholder("IDENTITY_"));
        assert!(!is_placeholder("_1"));
        assert!(!is_placeholder("a@b.com"));
        assert!(!is_placeholder("identity_1"));
    }
}
