//! Sanitize command implementation
//!
//! Reads infrastructure source text from a file or stdin, runs the
//! sanitization engine, and emits the sanitized payload plus a redaction
//! summary. The summary goes to stderr when the payload goes to stdout, so
//! piped output stays clean.

use crate::anonymization::audit::{AuditLogger, RunRecord};
use crate::anonymization::SanitizationEngine;
use crate::config::load_config_or_default;
use clap::{Args, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

/// Output format for the sanitize command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sanitized text only
    Text,
    /// Full JSON record: text, redactionCount, types
    Json,
}

/// Arguments for the sanitize command
#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Input file; omit or pass "-" to read stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only the redaction summary
    #[arg(long)]
    pub stats_only: bool,
}

impl SanitizeArgs {
    /// Execute the sanitize command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let input = self.read_input()?;
        tracing::info!(bytes = input.len(), "Sanitizing input");

        let engine = SanitizationEngine::new(&config.sanitization)?;

        let start = Instant::now();
        let result = engine.sanitize(&input)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            redaction_count = result.redaction_count,
            duration_ms,
            "Sanitization complete"
        );

        if config.sanitization.audit.enabled {
            let logger = AuditLogger::new(
                config.sanitization.audit.log_path.clone(),
                config.sanitization.audit.json_format,
                true,
            )?;
            logger.log_run(&RunRecord {
                input: &input,
                result: &result,
                duration_ms,
            })?;
        }

        if self.stats_only {
            print!("{}", result.format_console());
            return Ok(0);
        }

        let payload = match self.format {
            OutputFormat::Text => result.text.clone(),
            OutputFormat::Json => result.format_json()?,
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &payload)?;
                println!("✅ Sanitized output written to {}", path.display());
                print!("{}", result.format_console());
            }
            None => {
                println!("{payload}");
                eprintln!("{}", result.summary_line());
            }
        }

        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
            }
            _ => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}
