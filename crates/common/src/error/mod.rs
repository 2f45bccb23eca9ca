//! Common error types shared by the PiiGuard crates
//!
//! Module errors embed [`CommonError`] for the failures every module can
//! hit, add their own variants for the rest, and classify both through
//! [`ErrorClassification`]:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum PiiError {
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//!
//!     #[error("Duplicate PII category: {0}")]
//!     DuplicateCategory(String),
//! }
//!
//! impl_error_classification!(PiiError, Common,
//!     Self::DuplicateCategory(_) => {
//!         retryable: false,
//!         severity: ErrorSeverity::Error,
//!         critical: false,
//!     }
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// Error variants shared across modules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    /// A configured value was rejected
    ///
    /// `value` echoes the rejected input and is only rendered when present.
    #[error("Validation error for field '{field}'{}: {message}", value_suffix(.value))]
    Validation {
        /// Name of the rejected setting
        field: String,
        /// What is wrong with it
        message: String,
        /// Rejected input, if safe to echo
        value: Option<String>,
    },
}

fn value_suffix(value: &Option<String>) -> String {
    value.as_ref().map(|v| format!(" (value: '{v}')")).unwrap_or_default()
}

impl CommonError {
    /// Validation error for `field`.
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation { field: field.into(), message: message.into(), value: None }
    }

    /// Validation error echoing the rejected value
    ///
    /// Only use this for configuration values. Scanned text may contain PII
    /// and must never end up in an error message.
    pub fn validation_with_value<F: Into<String>, M: Into<String>, V: Into<String>>(
        field: F,
        message: M,
        value: V,
    ) -> Self {
        Self::Validation { field: field.into(), message: message.into(), value: Some(value.into()) }
    }
}

impl ErrorClassification for CommonError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    fn is_critical(&self) -> bool {
        false
    }
}

/// Classification shared by every module error
pub trait ErrorClassification {
    /// Whether repeating the operation unchanged can succeed
    fn is_retryable(&self) -> bool;

    /// Level used when the error is logged
    fn severity(&self) -> ErrorSeverity;

    /// Whether the error points at a bug rather than bad input
    fn is_critical(&self) -> bool;
}

/// Error severity levels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Worth monitoring
    Warning,
    /// Requires attention
    Error,
    /// Immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        })
    }
}

/// Implement [`ErrorClassification`] by delegating the embedded
/// [`CommonError`] variant and listing the module's own variants.
///
/// ```rust,ignore
/// impl_error_classification!(MyError, Common,
///     Self::Specific(_) => {
///         retryable: false,
///         severity: ErrorSeverity::Error,
///         critical: false,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_error_classification {
    (
        $error_type:ty,
        $common_variant:ident
        $(,
            $variant:pat => {
                retryable: $retryable:expr,
                severity: $severity:expr,
                critical: $critical:expr
                $(,)?
            }
        )*
        $(,)?
    ) => {
        impl $crate::error::ErrorClassification for $error_type {
            fn is_retryable(&self) -> bool {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::is_retryable(e),
                    $($variant => $retryable,)*
                }
            }

            fn severity(&self) -> $crate::error::ErrorSeverity {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::severity(e),
                    $($variant => $severity,)*
                }
            }

            fn is_critical(&self) -> bool {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::is_critical(e),
                    $($variant => $critical,)*
                }
            }
        }
    };
}
