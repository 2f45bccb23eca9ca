//! Diagnostics adapters

pub mod store;

pub use store::InMemoryDiagnostics;
