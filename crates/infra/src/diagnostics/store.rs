//! In-memory diagnostics store

use async_trait::async_trait;
use dashmap::DashMap;
use piiguard_core::{DiagnosticsSink, PiiDiagnostic};
use piiguard_domain::Result;
use tracing::trace;

/// Latest diagnostics per document identity.
///
/// Publishing replaces a document's entry; an empty publication removes it.
#[derive(Debug, Default)]
pub struct InMemoryDiagnostics {
    entries: DashMap<String, Vec<PiiDiagnostic>>,
}

impl InMemoryDiagnostics {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics currently published for `identity`.
    pub fn get(&self, identity: &str) -> Option<Vec<PiiDiagnostic>> {
        self.entries.get(identity).map(|entry| entry.value().clone())
    }

    /// Identities with at least one diagnostic, sorted.
    pub fn identities(&self) -> Vec<String> {
        let mut identities: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        identities.sort();
        identities
    }

    /// Diagnostics across all documents.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.value().len()).sum()
    }

    /// Drop every entry.
    pub fn clear_all(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl DiagnosticsSink for InMemoryDiagnostics {
    async fn publish(&self, identity: &str, diagnostics: Vec<PiiDiagnostic>) -> Result<()> {
        trace!(identity, count = diagnostics.len(), "Storing diagnostics");
        if diagnostics.is_empty() {
            self.entries.remove(identity);
        } else {
            self.entries.insert(identity.to_string(), diagnostics);
        }
        Ok(())
    }

    async fn clear(&self, identity: &str) -> Result<()> {
        self.entries.remove(identity);
        Ok(())
    }
}
