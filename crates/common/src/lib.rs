//! Modular common utilities shared across PiiGuard crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors, text offset indexing
//! - `runtime`: PII engine (pattern registry, scanning, redaction) and the
//!   debounce scheduler
//! - `observability`: tracing (pulled in by `runtime`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod text;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod privacy;
#[cfg(feature = "runtime")]
pub mod time;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, ErrorClassification, ErrorSeverity};
#[cfg(feature = "runtime")]
pub use privacy::patterns::{
    EnabledCategories, PatternRegistry, PiiCategory, PiiMatch, PiiPattern, RedactionEdit,
    RedactionEngine, ScanEngine, ScanRequest,
};
#[cfg(feature = "foundation")]
pub use text::TextIndex;
#[cfg(feature = "runtime")]
pub use time::debounce::DebounceScheduler;
