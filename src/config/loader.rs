//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CloakformConfig;
use crate::domain::errors::CloakformError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`CloakformConfig`]
/// 4. Applies environment variable overrides (`CLOAKFORM_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<CloakformConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CloakformError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CloakformError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CloakformConfig = toml::from_str(&contents)
        .map_err(|e| CloakformError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        CloakformError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// The sanitize command works without a config file; environment overrides
/// still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<CloakformConfig> {
    let path = path.as_ref();

    if !path.exists() {
        let mut config = CloakformConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(|e| {
            CloakformError::Configuration(format!("Configuration validation failed: {e}"))
        })?;
        return Ok(config);
    }

    load_config(path)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are copied through untouched.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CloakformError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CloakformError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `CLOAKFORM_*` environment variable overrides
fn apply_env_overrides(config: &mut CloakformConfig) -> Result<()> {
    if let Ok(val) = std::env::var("CLOAKFORM_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("CLOAKFORM_MAX_VALUE_LENGTH") {
        config.sanitization.max_value_length = val.parse().map_err(|_| {
            CloakformError::Configuration(format!("Invalid CLOAKFORM_MAX_VALUE_LENGTH: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("CLOAKFORM_AUDIT_ENABLED") {
        config.sanitization.audit.enabled = val.parse().map_err(|_| {
            CloakformError::Configuration(format!("Invalid CLOAKFORM_AUDIT_ENABLED: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("CLOAKFORM_AUDIT_LOG_PATH") {
        config.sanitization.audit.log_path = val.into();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
[application]
log_level = "debug"

[sanitization]
max_value_length = 128
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.sanitization.max_value_length, 128);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_config("/nonexistent/cloakform.toml").unwrap_err();
        assert!(matches!(err, CloakformError::Configuration(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config_or_default("/nonexistent/cloakform.toml").unwrap();
        assert_eq!(config.sanitization.max_value_length, 256);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(
            r#"
[sanitization]
max_value_length = 4
"#,
        );

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_env_var_substitution_skips_comments() {
        let file = write_config(
            "# log_level = \"${CLOAKFORM_UNSET_PLACEHOLDER}\"\n[application]\nlog_level = \"info\"\n",
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_missing_substitution_variable_is_an_error() {
        let file = write_config("[application]\nlog_level = \"${CLOAKFORM_UNSET_PLACEHOLDER}\"\n");

        let err = load_config(file.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains("CLOAKFORM_UNSET_PLACEHOLDER"));
    }
}
