//! # PiiGuard Domain
//!
//! Domain types for PiiGuard.
//!
//! This crate contains:
//! - The `PiiSettings` configuration value and its validation
//! - Document positions and ranges
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other PiiGuard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
