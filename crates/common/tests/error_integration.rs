//! Integration tests for `piiguard_common::error`.
//!
//! These suites validate classification and module error delegation so that
//! downstream crates receive consistent failure semantics.

#![cfg(feature = "runtime")]

use piiguard_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use piiguard_common::impl_error_classification;
use piiguard_common::privacy::patterns::{PatternRegistry, PiiError};
use thiserror::Error;

/// Validates how registry construction failures are classified.
///
/// # Test Steps
/// 1. Build registries with an empty category, an empty placeholder, a
///    malformed regex and a shadowed built-in
/// 2. Verify field problems arrive as embedded `CommonError::Validation`
/// 3. Verify every failure is a non-retryable, non-critical `Error`
#[test]
fn registry_failures_are_classified() {
    let failures = [
        PatternRegistry::builder().custom(" ", "x", "Blank", "[X]").build().unwrap_err(),
        PatternRegistry::builder().custom("badge", "B[0-9]+", "Badge", "").build().unwrap_err(),
        PatternRegistry::builder().custom("ticket", "(TCK-", "Ticket", "[T]").build().unwrap_err(),
        PatternRegistry::builder().custom("ssn", "[0-9]+", "Dup", "[SSN]").build().unwrap_err(),
    ];

    assert!(matches!(
        &failures[0],
        PiiError::Common(CommonError::Validation { field, .. }) if field == "category"
    ));
    assert_eq!(
        failures[1].to_string(),
        "Validation error for field 'placeholder' (value: 'badge'): must not be empty"
    );
    assert!(matches!(&failures[2], PiiError::PatternCompilation { category, .. } if category == "ticket"));
    assert!(matches!(&failures[3], PiiError::DuplicateCategory(c) if c == "ssn"));

    for err in &failures {
        assert!(!err.is_retryable(), "retryable mismatch for {}", err);
        assert_eq!(err.severity(), ErrorSeverity::Error, "severity mismatch for {}", err);
        assert!(!err.is_critical(), "critical mismatch for {}", err);
    }
}

#[derive(Debug, Error)]
enum ScanJobError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("document {0} vanished")]
    DocumentGone(String),

    #[error("offset table corrupted")]
    Corrupted,
}

impl_error_classification!(ScanJobError, Common,
    Self::DocumentGone(_) => {
        retryable: true,
        severity: ErrorSeverity::Warning,
        critical: false,
    },
    Self::Corrupted => {
        retryable: false,
        severity: ErrorSeverity::Critical,
        critical: true,
    }
);

/// Validates the classification macro on a module error.
///
/// # Test Steps
/// 1. Wrap a `CommonError` and verify classification is delegated
/// 2. Verify module-specific variants use their own classification
#[test]
fn module_errors_delegate_through_macro() {
    let wrapped: ScanJobError = CommonError::validation("debounce_ms", "must be positive").into();
    assert_eq!(wrapped.severity(), ErrorSeverity::Error);
    assert!(!wrapped.is_retryable());
    assert_eq!(
        wrapped.to_string(),
        "Validation error for field 'debounce_ms': must be positive"
    );

    let gone = ScanJobError::DocumentGone("file:///tmp/a.txt".into());
    assert!(gone.is_retryable());
    assert_eq!(gone.severity(), ErrorSeverity::Warning);

    assert!(ScanJobError::Corrupted.is_critical());
    assert!(ScanJobError::Corrupted.severity() > gone.severity());
}
