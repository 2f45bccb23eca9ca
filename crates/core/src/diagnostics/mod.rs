//! PII diagnostics domain

pub mod exclusion;
pub mod ports;
pub mod service;
pub mod summary;
pub mod types;

pub use exclusion::ExclusionFilter;
pub use ports::*;
pub use service::PiiDiagnosticsService;
pub use summary::ScanSummary;
pub use types::*;
