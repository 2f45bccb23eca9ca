//! Privacy Module - Portable Core
//!
//! This module provides portable, domain-independent PII detection and
//! redaction: a pattern registry, a scan engine, and an offset-preserving
//! redaction engine.

pub mod patterns;

// Re-export commonly used types
pub use patterns::{
    EnabledCategories, PatternRegistry, PatternRegistryBuilder, PiiCategory, PiiError, PiiMatch,
    PiiPattern, PiiResult, RedactionEdit, RedactionEngine, ScanEngine, ScanRequest,
};
