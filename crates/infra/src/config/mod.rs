//! Configuration loading
//!
//! This module provides utilities for loading PII settings from files,
//! with an environment variable override for the file location.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_file, parse_settings, probe_config_paths};
