//! Command implementations

pub mod init;
pub mod sanitize;
pub mod validate;
