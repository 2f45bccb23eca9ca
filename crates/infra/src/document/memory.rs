//! In-memory document adapter

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use piiguard_common::privacy::patterns::{RedactionEdit, RedactionEngine};
use piiguard_core::{DocumentEdit, DocumentSnapshot, DocumentSource, EditSink};
use piiguard_domain::{PiiGuardError, Result};
use tracing::debug;

/// A document held in memory.
///
/// Implements [`DocumentSource`] for scanning and [`EditSink`] for applying
/// redactions to itself. Every change swaps in a new snapshot with the next
/// version; snapshots already handed out stay valid.
#[derive(Debug)]
pub struct InMemoryDocument {
    identity: String,
    relative_path: String,
    current: RwLock<Arc<DocumentSnapshot>>,
}

impl InMemoryDocument {
    /// Document at version 0.
    pub fn new(
        identity: impl Into<String>,
        relative_path: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            relative_path: relative_path.into(),
            current: RwLock::new(Arc::new(DocumentSnapshot::new(text.into(), 0))),
        }
    }

    /// Bumped on every text change.
    pub fn version(&self) -> u64 {
        self.current.read().version()
    }

    /// Replace the whole text, as a host edit would.
    pub fn set_text(&self, text: impl Into<String>) {
        let mut current = self.current.write();
        let version = current.version() + 1;
        *current = Arc::new(DocumentSnapshot::new(text.into(), version));
    }
}

impl DocumentSource for InMemoryDocument {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn relative_path(&self) -> &str {
        &self.relative_path
    }

    fn snapshot(&self) -> Arc<DocumentSnapshot> {
        Arc::clone(&self.current.read())
    }
}

#[async_trait]
impl EditSink for InMemoryDocument {
    async fn apply_edits(&self, identity: &str, edits: Vec<DocumentEdit>) -> Result<bool> {
        if identity != self.identity {
            return Err(PiiGuardError::Edit(format!(
                "edit for '{}' sent to document '{}'",
                identity, self.identity
            )));
        }
        if edits.is_empty() {
            return Ok(true);
        }

        let mut current = self.current.write();
        let redactions: Vec<RedactionEdit> = edits
            .into_iter()
            .map(|edit| RedactionEdit {
                start: current.offset_at(edit.range.start),
                end: current.offset_at(edit.range.end),
                replacement: edit.replacement,
            })
            .collect();

        let text = RedactionEngine::new().apply_edits(current.text(), &redactions);
        let version = current.version() + 1;
        *current = Arc::new(DocumentSnapshot::new(text, version));

        debug!(identity, edits = redactions.len(), version, "Edits applied to document");
        Ok(true)
    }
}
