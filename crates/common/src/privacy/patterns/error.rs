use thiserror::Error;

use crate::error::{CommonError, ErrorSeverity};
use crate::impl_error_classification;

/// Error types for PII pattern registration
///
/// Scanning and redaction never fail; every variant here is raised while a
/// [`PatternRegistry`](super::PatternRegistry) is being built.
#[derive(Debug, Error)]
pub enum PiiError {
    /// A custom detector field was rejected before compilation
    #[error(transparent)]
    Common(#[from] CommonError),

    /// The custom regular expression does not compile
    #[error("Pattern compilation failed for '{category}': {message}")]
    PatternCompilation {
        /// Category of the rejected detector
        category: String,
        /// Compiler diagnostic
        message: String,
    },

    /// Two detectors share a category
    #[error("Duplicate PII category: {0}")]
    DuplicateCategory(String),
}

/// Result alias for the PII engine.
pub type PiiResult<T> = Result<T, PiiError>;

impl_error_classification!(PiiError, Common,
    Self::PatternCompilation { .. } => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::DuplicateCategory(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorClassification;

    /// Validates classification of compilation errors.
    ///
    /// Assertions:
    /// - Ensures compilation errors are not retryable.
    /// - Confirms the message names the category.
    #[test]
    fn test_pattern_compilation_classification() {
        let err = PiiError::PatternCompilation {
            category: "employeeId".into(),
            message: "unclosed group".into(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(
            err.to_string(),
            "Pattern compilation failed for 'employeeId': unclosed group"
        );
    }

    /// Validates delegation to `CommonError` for the embedded variant.
    #[test]
    fn test_common_variant_is_transparent() {
        let err = PiiError::from(CommonError::validation("placeholder", "must not be empty"));
        assert!(!err.is_critical());
        assert_eq!(err.to_string(), "Validation error for field 'placeholder': must not be empty");
    }
}
