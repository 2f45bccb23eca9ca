//! Shared test helpers for `piiguard-core` integration tests.
//!
//! Lightweight in-memory stand-ins for the document host so the tests can
//! focus on service behaviour.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use piiguard_core::{
    DiagnosticsSink, DocumentEdit, DocumentSnapshot, DocumentSource, EditSink, PiiDiagnostic,
};
use piiguard_domain::{PiiGuardError, Result};

/// Document whose snapshot is rebuilt on every `set_text`.
pub struct MockDocument {
    identity: String,
    relative_path: String,
    current: Mutex<Arc<DocumentSnapshot>>,
}

impl MockDocument {
    pub fn new(relative_path: &str, text: &str) -> Self {
        Self {
            identity: format!("file:///workspace/{relative_path}"),
            relative_path: relative_path.to_string(),
            current: Mutex::new(Arc::new(DocumentSnapshot::new(text, 0))),
        }
    }

    pub fn set_text(&self, text: &str) {
        let mut current = self.current.lock();
        let version = current.version() + 1;
        *current = Arc::new(DocumentSnapshot::new(text, version));
    }
}

impl DocumentSource for MockDocument {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn relative_path(&self) -> &str {
        &self.relative_path
    }

    fn snapshot(&self) -> Arc<DocumentSnapshot> {
        Arc::clone(&self.current.lock())
    }
}

/// Document that prepends a line after each snapshot it hands out, as a
/// host editing concurrently with a scan would.
pub struct ShiftingDocument {
    inner: MockDocument,
}

impl ShiftingDocument {
    pub fn new(relative_path: &str, text: &str) -> Self {
        Self { inner: MockDocument::new(relative_path, text) }
    }
}

impl DocumentSource for ShiftingDocument {
    fn identity(&self) -> &str {
        self.inner.identity()
    }

    fn relative_path(&self) -> &str {
        self.inner.relative_path()
    }

    fn snapshot(&self) -> Arc<DocumentSnapshot> {
        let taken = self.inner.snapshot();
        self.inner.set_text(&format!("inserted line\n{}", taken.text()));
        taken
    }
}

/// Records the latest diagnostics per document and counts publications.
#[derive(Default)]
pub struct RecordingDiagnostics {
    published: Mutex<HashMap<String, Vec<PiiDiagnostic>>>,
    publish_calls: Mutex<usize>,
    fail: Mutex<bool>,
}

impl RecordingDiagnostics {
    pub fn get(&self, identity: &str) -> Option<Vec<PiiDiagnostic>> {
        self.published.lock().get(identity).cloned()
    }

    pub fn publish_calls(&self) -> usize {
        *self.publish_calls.lock()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock() = fail;
    }
}

#[async_trait]
impl DiagnosticsSink for RecordingDiagnostics {
    async fn publish(&self, identity: &str, diagnostics: Vec<PiiDiagnostic>) -> Result<()> {
        if *self.fail.lock() {
            return Err(PiiGuardError::Internal("diagnostics host unavailable".into()));
        }
        *self.publish_calls.lock() += 1;
        self.published.lock().insert(identity.to_string(), diagnostics);
        Ok(())
    }

    async fn clear(&self, identity: &str) -> Result<()> {
        self.published.lock().remove(identity);
        Ok(())
    }
}

/// Records edit batches and answers with a configurable verdict.
pub struct RecordingEdits {
    batches: Mutex<Vec<(String, Vec<DocumentEdit>)>>,
    accept: bool,
}

impl RecordingEdits {
    pub fn accepting() -> Self {
        Self { batches: Mutex::new(Vec::new()), accept: true }
    }

    pub fn rejecting() -> Self {
        Self { batches: Mutex::new(Vec::new()), accept: false }
    }

    pub fn batches(&self) -> Vec<(String, Vec<DocumentEdit>)> {
        self.batches.lock().clone()
    }
}

#[async_trait]
impl EditSink for RecordingEdits {
    async fn apply_edits(&self, identity: &str, edits: Vec<DocumentEdit>) -> Result<bool> {
        self.batches.lock().push((identity.to_string(), edits));
        Ok(self.accept)
    }
}
