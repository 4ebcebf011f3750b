// cloakform - IaC sanitization tool
// Copyright (c) 2026 Cloakform Contributors
// Licensed under the MIT License

//! # cloakform - Infrastructure-as-Code Sanitization
//!
//! cloakform rewrites infrastructure source text to strip or alias sensitive
//! identifiers before the text leaves the local environment, while keeping
//! enough structural information (stable placeholder names) that an external
//! reviewer can still reason about topology and resource relationships.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Aliasing** structural identifiers (projects, buckets, networks,
//!   emails, addresses) with stable `CATEGORY_n` placeholders
//! - **Destroying** credentials irreversibly (`[REDACTED_SECRET]`)
//! - **Exempting** security-relevant literals (open ranges, default names,
//!   standard regions) that an auditor must see verbatim
//! - **Reporting** redaction counts per category for live feedback
//!
//! ## Architecture
//!
//! cloakform follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - The sanitization engine (rules, aliasing, report)
//! - [`domain`] - Error types and result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```
//! use cloakform::anonymization::SanitizationEngine;
//! use cloakform::config::SanitizationConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = SanitizationEngine::new(&SanitizationConfig::default())?;
//!
//! let result = engine.sanitize(
//!     "project = \"acme-payments\"\npassword = \"hunter2\"\n",
//! )?;
//!
//! assert_eq!(
//!     result.text,
//!     "project = \"CLOUD_ID_1\"\npassword = \"[REDACTED_SECRET]\"\n"
//! );
//! assert_eq!(result.redaction_count, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! For a fixed input, output text and statistics are fully reproducible:
//! alias numbering depends solely on first-encounter order within the fixed
//! pass sequence. Each `sanitize` call owns its own state; concurrent calls
//! never share anything.
//!
//! ## Error Handling
//!
//! The library boundary uses [`domain::CloakformError`]; engine internals
//! propagate `anyhow::Result` with context:
//!
//! ```no_run
//! use cloakform::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = cloakform::config::load_config("cloakform.toml")?;
//!     Ok(())
//! }
//! ```

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
