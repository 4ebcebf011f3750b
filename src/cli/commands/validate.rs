//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!(
                    "  Max Value Length: {}",
                    config.sanitization.max_value_length
                );
                println!(
                    "  Audit Trail: {}",
                    if config.sanitization.audit.enabled {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
                if config.sanitization.audit.enabled {
                    println!(
                        "  Audit Log Path: {}",
                        config.sanitization.audit.log_path.display()
                    );
                }
                println!(
                    "  File Logging: {}",
                    if config.logging.local_enabled {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}
