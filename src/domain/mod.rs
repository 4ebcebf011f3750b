//! Domain types for cloakform
//!
//! The domain layer provides:
//! - **Error types** ([`CloakformError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible operations in the library return [`Result<T, CloakformError>`];
//! third-party error types never cross the public API boundary.

pub mod errors;
pub mod result;

pub use errors::CloakformError;
pub use result::Result;
