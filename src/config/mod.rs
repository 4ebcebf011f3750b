//! Configuration management
//!
//! TOML configuration with `${VAR}` substitution and `CLOAKFORM_*`
//! environment overrides. All sections default, so the tool runs without a
//! config file.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AuditConfig, CloakformConfig, LoggingConfig, SanitizationConfig,
};
