//! PII pattern detection and redaction
//!
//! A [`PatternRegistry`] holds the ordered set of detectors, the
//! [`ScanEngine`] runs enabled detectors over text, and the
//! [`RedactionEngine`] replaces matches with category placeholders while
//! keeping the remaining text intact.

pub mod error;
pub mod redaction;
pub mod registry;
pub mod scan;
pub mod types;

// Re-export commonly used types
pub use error::{PiiError, PiiResult};
pub use redaction::{RedactionEdit, RedactionEngine};
pub use registry::{PatternRegistry, PatternRegistryBuilder, PiiPattern};
pub use scan::ScanEngine;
pub use types::{EnabledCategories, PiiCategory, PiiMatch, ScanRequest};
