//! # PiiGuard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The diagnostics service driving scans, debounced rescans and redaction
//! - Port/adapter interfaces (traits) for documents, diagnostics and edits
//! - Scan summaries and path exclusion rules
//! - Immutable document snapshots with line/character mapping
//!
//! ## Architecture Principles
//! - Only depends on `piiguard-common` and `piiguard-domain`
//! - No filesystem, editor, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod diagnostics;
pub mod document;

pub use diagnostics::ports::{DiagnosticsSink, DocumentSource, EditSink};
pub use diagnostics::types::{
    hover_message, DocumentEdit, DocumentEvent, DocumentMatch, PiiDiagnostic,
};
pub use diagnostics::{ExclusionFilter, PiiDiagnosticsService, ScanSummary};
pub use document::{DocumentSnapshot, LineIndex};
