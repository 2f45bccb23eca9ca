//! Port interfaces for PII diagnostics
//!
//! These traits define the boundaries between the diagnostics service and
//! the editor (or any other document host) it runs inside.

use std::sync::Arc;

use async_trait::async_trait;
use piiguard_domain::{Position, Result, TextRange};

use super::types::{DocumentEdit, PiiDiagnostic};
use crate::document::DocumentSnapshot;

/// Read access to an open document.
///
/// Offsets are character offsets into the text of a [`DocumentSnapshot`].
/// Callers take one snapshot per operation and derive every offset and
/// position from it; the convenience methods below each take their own.
pub trait DocumentSource: Send + Sync {
    /// Stable identity of the document (for example its URI).
    fn identity(&self) -> &str;

    /// Path relative to the workspace, used for exclusion rules.
    fn relative_path(&self) -> &str;

    /// Current text and line table.
    fn snapshot(&self) -> Arc<DocumentSnapshot>;

    /// Full current text.
    fn text(&self) -> String {
        self.snapshot().text().to_string()
    }

    /// Convert a position to a character offset, clamping to the document.
    fn offset_at(&self, position: Position) -> usize {
        self.snapshot().offset_at(position)
    }

    /// Convert a character offset to a position, clamping to the document.
    fn position_at(&self, offset: usize) -> Position {
        self.snapshot().position_at(offset)
    }

    /// Text covered by `range`.
    fn text_in(&self, range: TextRange) -> String {
        self.snapshot().text_in(range)
    }
}

/// Destination for published diagnostics, keyed by document identity.
#[async_trait]
pub trait DiagnosticsSink: Send + Sync {
    /// Replace all diagnostics for a document
    async fn publish(&self, identity: &str, diagnostics: Vec<PiiDiagnostic>) -> Result<()>;

    /// Remove all diagnostics for a document
    async fn clear(&self, identity: &str) -> Result<()>;
}

/// Applies edit batches to a live document.
#[async_trait]
pub trait EditSink: Send + Sync {
    /// Apply `edits` atomically. Edits arrive ordered back to front.
    ///
    /// Returns `Ok(false)` when the host declined the edit (for example
    /// because the document changed underneath it).
    async fn apply_edits(&self, identity: &str, edits: Vec<DocumentEdit>) -> Result<bool>;
}
