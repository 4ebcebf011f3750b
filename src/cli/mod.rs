//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for cloakform using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// cloakform - IaC sanitization tool
#[derive(Parser, Debug)]
#[command(name = "cloakform")]
#[command(version, about, long_about = None)]
#[command(author = "Cloakform Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cloakform.toml", env = "CLOAKFORM_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLOAKFORM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitize infrastructure source text
    Sanitize(commands::sanitize::SanitizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_sanitize() {
        let cli = Cli::parse_from(["cloakform", "sanitize"]);
        assert_eq!(cli.config, "cloakform.toml");
        assert!(matches!(cli.command, Commands::Sanitize(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["cloakform", "--config", "custom.toml", "sanitize"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["cloakform", "--log-level", "debug", "sanitize"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["cloakform", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["cloakform", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
