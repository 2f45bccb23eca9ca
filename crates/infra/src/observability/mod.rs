//! Observability infrastructure
//!
//! Structured logging through `tracing`. Engine and service code only emit
//! events; binaries and tests decide where they go by installing a
//! subscriber here.

pub mod logging;

pub use logging::{env_filter, init_tracing, init_tracing_with, LogFormat};
