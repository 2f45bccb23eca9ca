//! Time utilities
//!
//! - **[`debounce`]**: keyed trailing-edge debouncing on the tokio runtime

pub mod debounce;

pub use debounce::DebounceScheduler;
