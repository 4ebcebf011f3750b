//! Audit logger for sanitization runs
//!
//! Writes one append-only entry per run. The original input is never
//! logged; only its SHA-256 digest, so a run can be correlated with a
//! source without the log becoming a second copy of the sensitive text.

use crate::anonymization::report::SanitizationResult;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    run_id: String,
    /// SHA-256 hash of the original input text
    input_hash: String,
    redaction_count: usize,
    types: HashMap<String, usize>,
    duration_ms: u64,
}

/// One sanitization run as seen by the audit trail
#[derive(Debug)]
pub struct RunRecord<'a> {
    /// Original (pre-sanitization) input text
    pub input: &'a str,
    /// Engine output
    pub result: &'a SanitizationResult,
    /// Wall-clock duration measured by the caller
    pub duration_ms: u64,
}

/// Append-only audit logger
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log one sanitization run
    pub fn log_run(&self, record: &RunRecord<'_>) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            run_id: Uuid::new_v4().to_string(),
            input_hash: hash_input(record.input),
            redaction_count: record.result.redaction_count,
            types: record
                .result
                .types
                .iter()
                .map(|(category, count)| (category.label().to_string(), *count))
                .collect(),
            duration_ms: record.duration_ms,
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Run: {} | Input: {} | Redactions: {} | Time: {}ms",
                entry.timestamp,
                entry.run_id,
                entry.input_hash,
                entry.redaction_count,
                entry.duration_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// SHA-256 digest of the input text, hex-encoded
fn hash_input(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::alias::AliasAllocator;
    use crate::anonymization::models::SensitiveCategory;
    use tempfile::tempdir;

    fn sample_result() -> SanitizationResult {
        let mut aliases = AliasAllocator::new();
        aliases.alias_for(SensitiveCategory::Identity, "a@b.com");
        SanitizationResult::assemble("owner-email = \"IDENTITY_1\"".to_string(), &aliases)
    }

    #[test]
    fn test_hash_is_stable_and_distinct() {
        assert_eq!(hash_input("project = \"x\""), hash_input("project = \"x\""));
        assert_ne!(hash_input("project = \"x\""), hash_input("project = \"y\""));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        let result = sample_result();
        logger
            .log_run(&RunRecord {
                input: "owner-email = \"a@b.com\"",
                result: &result,
                duration_ms: 3,
            })
            .unwrap();

        assert!(!log_path.exists());
    }

    #[test]
    fn test_log_run_never_contains_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        let result = sample_result();
        logger
            .log_run(&RunRecord {
                input: "owner-email = \"a@b.com\"",
                result: &result,
                duration_ms: 3,
            })
            .unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("\"redaction_count\":1"));
        assert!(content.contains("IDENTITY"));
        assert!(!content.contains("a@b.com"));
    }

    #[test]
    fn test_plain_text_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false, true).unwrap();

        let result = sample_result();
        logger
            .log_run(&RunRecord {
                input: "owner-email = \"a@b.com\"",
                result: &result,
                duration_ms: 7,
            })
            .unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Redactions: 1"));
        assert!(content.contains("Time: 7ms"));
    }
}
