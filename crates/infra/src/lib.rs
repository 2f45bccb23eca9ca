//! # PiiGuard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (TOML/JSON files, env override)
//! - In-memory documents backed by immutable snapshots
//! - An in-memory diagnostics store
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `piiguard-core`
//! - Depends on `piiguard-common`, `piiguard-domain` and `piiguard-core`
//! - Contains all "impure" code (file I/O, global subscriber)

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod errors;
pub mod observability;

// Re-export commonly used items
pub use diagnostics::InMemoryDiagnostics;
pub use document::{InMemoryDocument, InMemoryWorkspace};
pub use errors::InfraError;
pub use observability::init_tracing;
