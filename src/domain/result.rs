//! Result type alias for cloakform

use super::errors::CloakformError;

/// Result type alias for cloakform operations
///
/// This is a convenience type alias that uses `CloakformError` as the error
/// type. Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, CloakformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
