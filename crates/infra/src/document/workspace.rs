//! Registry of open in-memory documents

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use piiguard_core::{DocumentEdit, EditSink};
use piiguard_domain::{PiiGuardError, Result};
use tracing::warn;

use super::memory::InMemoryDocument;

/// Open documents keyed by identity. Routes edit batches to the document
/// they name.
#[derive(Debug, Default)]
pub struct InMemoryWorkspace {
    documents: DashMap<String, Arc<InMemoryDocument>>,
}

impl InMemoryWorkspace {
    /// Empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document, replacing any previous one with the same identity.
    pub fn open(
        &self,
        identity: impl Into<String>,
        relative_path: impl Into<String>,
        text: impl Into<String>,
    ) -> Arc<InMemoryDocument> {
        let identity = identity.into();
        let doc = Arc::new(InMemoryDocument::new(identity.clone(), relative_path, text));
        self.documents.insert(identity, Arc::clone(&doc));
        doc
    }

    /// Open document with `identity`.
    pub fn get(&self, identity: &str) -> Option<Arc<InMemoryDocument>> {
        self.documents.get(identity).map(|entry| Arc::clone(entry.value()))
    }

    /// Close and return the document with `identity`.
    pub fn close(&self, identity: &str) -> Option<Arc<InMemoryDocument>> {
        self.documents.remove(identity).map(|(_, doc)| doc)
    }

    /// Number of open documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document is open.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl EditSink for InMemoryWorkspace {
    async fn apply_edits(&self, identity: &str, edits: Vec<DocumentEdit>) -> Result<bool> {
        let Some(doc) = self.get(identity) else {
            warn!(identity, "Edit for a document that is not open");
            return Err(PiiGuardError::Edit(format!("document '{identity}' is not open")));
        };
        doc.apply_edits(identity, edits).await
    }
}
