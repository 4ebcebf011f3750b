//! Configuration schema types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main cloakform configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults, so a missing file or an empty document is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloakformConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Sanitization engine settings
    #[serde(default)]
    pub sanitization: SanitizationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CloakformConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.sanitization.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Sanitization engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizationConfig {
    /// Longest quoted value a key-scoped rule will capture. Longer values
    /// are left unredacted rather than risking pathological scans.
    #[serde(default = "default_max_value_length")]
    pub max_value_length: usize,

    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl SanitizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(16..=4096).contains(&self.max_value_length) {
            return Err(format!(
                "max_value_length must be between 16 and 4096, got {}",
                self.max_value_length
            ));
        }
        Ok(())
    }
}

impl Default for SanitizationConfig {
    fn default() -> Self {
        Self {
            max_value_length: default_max_value_length(),
            audit: AuditConfig::default(),
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the append-only run log
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_value_length() -> usize {
    256
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/sanitization.log")
}

fn default_audit_json_format() -> bool {
    true
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CloakformConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.sanitization.max_value_length, 256);
        assert!(!config.sanitization.audit.enabled);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CloakformConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.sanitization.max_value_length, 256);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = CloakformConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_value_length_bounds() {
        let mut config = CloakformConfig::default();
        config.sanitization.max_value_length = 8;
        assert!(config.validate().is_err());
        config.sanitization.max_value_length = 10_000;
        assert!(config.validate().is_err());
        config.sanitization.max_value_length = 512;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = CloakformConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
