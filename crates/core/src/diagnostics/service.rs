//! PII diagnostics service - scanning, publishing, scheduling and redaction

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use piiguard_common::privacy::patterns::{
    EnabledCategories, PatternRegistry, PiiCategory, PiiError, PiiMatch, RedactionEngine,
    ScanEngine, ScanRequest,
};
use piiguard_common::time::DebounceScheduler;
use piiguard_common::ErrorClassification;
use piiguard_domain::{PiiGuardError, PiiSettings, Result, TextRange};
use tracing::{debug, info, instrument, warn};

use super::exclusion::ExclusionFilter;
use super::ports::{DiagnosticsSink, DocumentSource, EditSink};
use super::summary::ScanSummary;
use super::types::{DocumentEdit, DocumentEvent, DocumentMatch, PiiDiagnostic};
use crate::document::DocumentSnapshot;

/// Everything derived from one settings value. Replaced wholesale on
/// reconfiguration.
#[derive(Debug)]
struct ActiveConfig {
    settings: Arc<PiiSettings>,
    engine: ScanEngine,
    enabled: EnabledCategories,
    exclusions: ExclusionFilter,
}

impl ActiveConfig {
    fn build(settings: PiiSettings) -> Result<Self> {
        settings.validate()?;

        let registry = settings
            .custom_patterns
            .iter()
            .fold(PatternRegistry::builder(), |builder, custom| {
                builder.custom(
                    custom.category.as_str(),
                    &custom.pattern,
                    custom.description.as_str(),
                    custom.placeholder.as_str(),
                )
            })
            .build()
            .map_err(pattern_error)?;

        let enabled = settings.pii_patterns.iter().cloned().collect();
        let exclusions = ExclusionFilter::new(&settings.exclude_patterns)?;

        Ok(Self {
            settings: Arc::new(settings),
            engine: ScanEngine::new(registry),
            enabled,
            exclusions,
        })
    }

    fn description<'a>(&'a self, category: &'a PiiCategory) -> &'a str {
        self.engine
            .registry()
            .get(category)
            .map_or_else(|| category.as_str(), |pattern| pattern.description.as_str())
    }
}

fn pattern_error(err: PiiError) -> PiiGuardError {
    warn!(severity = ?err.severity(), error = %err, "Custom pattern rejected");
    PiiGuardError::Pattern(err.to_string())
}

/// State shared with scheduled scans, which read the active configuration
/// when they fire rather than when they were scheduled.
struct ServiceState {
    active: RwLock<Arc<ActiveConfig>>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl ServiceState {
    fn snapshot(&self) -> Arc<ActiveConfig> {
        Arc::clone(&self.active.read())
    }

    async fn scan_and_publish(&self, doc: &dyn DocumentSource) -> Vec<DocumentMatch> {
        let active = self.snapshot();
        let identity = doc.identity();

        if !active.settings.enable_pii_detection {
            debug!(identity, "PII detection disabled, clearing diagnostics");
            if let Err(err) = self.diagnostics.clear(identity).await {
                warn!(identity, error = %err, "Failed to clear diagnostics");
            }
            return Vec::new();
        }

        let started = Instant::now();
        let snapshot = doc.snapshot();
        let found = active.engine.scan_text(snapshot.text(), &active.enabled);
        let located = locate(&snapshot, found);

        let severity = active.settings.pii_severity;
        let diagnostics = located
            .iter()
            .map(|m| PiiDiagnostic::for_match(m, active.description(&m.pii.category), severity))
            .collect();

        if let Err(err) = self.diagnostics.publish(identity, diagnostics).await {
            warn!(identity, error = %err, "Failed to publish PII diagnostics");
        }

        info!(
            identity,
            version = snapshot.version(),
            matches = located.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Document scanned for PII"
        );
        located
    }
}

fn locate(snapshot: &DocumentSnapshot, found: Vec<PiiMatch>) -> Vec<DocumentMatch> {
    found
        .into_iter()
        .map(|pii| {
            let range = snapshot.range_of(pii.start, pii.end);
            DocumentMatch { pii, range }
        })
        .collect()
}

/// PII diagnostics service
///
/// Scans documents with the configured categories, publishes one diagnostic
/// per match, debounces rescans while a document is being edited and turns
/// matches into redaction edits.
pub struct PiiDiagnosticsService {
    state: Arc<ServiceState>,
    scheduler: DebounceScheduler<String>,
    redaction: RedactionEngine,
}

impl PiiDiagnosticsService {
    /// Create a service from validated settings.
    ///
    /// # Errors
    /// Returns `PiiGuardError::Config` for invalid settings and
    /// `PiiGuardError::Pattern` if a custom pattern does not compile.
    pub fn new(settings: PiiSettings, diagnostics: Arc<dyn DiagnosticsSink>) -> Result<Self> {
        let active = ActiveConfig::build(settings)?;
        let scheduler = DebounceScheduler::new(active.settings.debounce());

        Ok(Self {
            state: Arc::new(ServiceState { active: RwLock::new(Arc::new(active)), diagnostics }),
            scheduler,
            redaction: RedactionEngine::new(),
        })
    }

    /// Current settings.
    pub fn settings(&self) -> Arc<PiiSettings> {
        Arc::clone(&self.state.snapshot().settings)
    }

    /// Swap in new settings. On error the previous settings stay active.
    pub fn update_configuration(&self, settings: PiiSettings) -> Result<()> {
        let next = ActiveConfig::build(settings)?;
        self.scheduler.set_delay(next.settings.debounce());

        info!(
            enabled = next.settings.enable_pii_detection,
            categories = next.enabled.len(),
            custom_patterns = next.settings.custom_patterns.len(),
            "PII settings updated"
        );
        *self.state.active.write() = Arc::new(next);
        Ok(())
    }

    /// Whether a document at `relative_path` should be scanned automatically.
    pub fn should_scan(&self, relative_path: &str) -> bool {
        let active = self.state.snapshot();
        active.settings.enable_pii_detection && !active.exclusions.rejects(relative_path)
    }

    /// Scan the whole document and publish its diagnostics.
    ///
    /// With detection disabled this clears the document's diagnostics and
    /// returns nothing. Sink failures are logged, not returned.
    #[instrument(skip(self, doc), fields(identity = doc.identity()))]
    pub async fn scan_document(&self, doc: &dyn DocumentSource) -> Vec<DocumentMatch> {
        self.state.scan_and_publish(doc).await
    }

    /// Scan only `selection`. Offsets are absolute in the document.
    ///
    /// Runs regardless of the detection switch and publishes nothing.
    pub fn scan_selection(&self, doc: &dyn DocumentSource, selection: TextRange) -> Vec<DocumentMatch> {
        let active = self.state.snapshot();
        let snapshot = doc.snapshot();
        let start = snapshot.offset_at(selection.start);
        let end = snapshot.offset_at(selection.end);

        let request = ScanRequest::new(snapshot.text(), &active.enabled).with_range(start..end);
        let found = active.engine.scan(&request);
        debug!(identity = doc.identity(), matches = found.len(), "Selection scanned for PII");
        locate(&snapshot, found)
    }

    /// Matches a redaction command should act on: the selection when it is
    /// non-empty, otherwise the whole document.
    pub async fn matches_for_redaction(
        &self,
        doc: &dyn DocumentSource,
        selection: Option<TextRange>,
    ) -> Vec<DocumentMatch> {
        match selection {
            Some(range) if !range.is_empty() => self.scan_selection(doc, range),
            _ => self.scan_document(doc).await,
        }
    }

    /// Debounce a full scan of `doc`, keyed by its identity.
    ///
    /// Returns `false` if nothing was scheduled (service disposed or no
    /// runtime).
    pub fn schedule_scan(&self, doc: Arc<dyn DocumentSource>) -> bool {
        let key = doc.identity().to_string();
        let state = Arc::clone(&self.state);
        self.scheduler.schedule(key, move || async move {
            state.scan_and_publish(doc.as_ref()).await;
        })
    }

    /// React to a document lifecycle event.
    ///
    /// Returns whether a scan ran or was scheduled.
    pub async fn handle_event(&self, event: DocumentEvent, doc: Arc<dyn DocumentSource>) -> bool {
        if event == DocumentEvent::Closed {
            self.scheduler.cancel(&doc.identity().to_string());
            if let Err(err) = self.clear_diagnostics(doc.identity()).await {
                warn!(identity = doc.identity(), error = %err, "Failed to clear diagnostics");
            }
            return false;
        }

        if !self.should_scan(doc.relative_path()) {
            debug!(identity = doc.identity(), ?event, "Document skipped");
            return false;
        }

        match event {
            DocumentEvent::Opened => {
                self.scan_document(doc.as_ref()).await;
                true
            }
            DocumentEvent::Saved if self.settings().auto_scan_on_save => {
                self.scan_document(doc.as_ref()).await;
                true
            }
            DocumentEvent::Changed => self.schedule_scan(doc),
            DocumentEvent::Saved | DocumentEvent::Closed => false,
        }
    }

    /// Replace `matches` in the live document with their placeholders.
    ///
    /// Edits are handed to `sink` ordered back to front. Returns the sink's
    /// verdict.
    #[instrument(skip(self, doc, sink, matches), fields(identity = doc.identity(), matches = matches.len()))]
    pub async fn redact(
        &self,
        doc: &dyn DocumentSource,
        sink: &dyn EditSink,
        matches: &[DocumentMatch],
    ) -> Result<bool> {
        if matches.is_empty() {
            return Ok(true);
        }

        let snapshot = doc.snapshot();
        let pii: Vec<PiiMatch> = matches.iter().map(|m| m.pii.clone()).collect();
        let edits: Vec<DocumentEdit> = self
            .redaction
            .plan(&pii)
            .into_iter()
            .map(|edit| DocumentEdit {
                range: snapshot.range_of(edit.start, edit.end),
                replacement: edit.replacement,
            })
            .collect();

        let applied = sink.apply_edits(doc.identity(), edits).await?;
        if applied {
            info!(identity = doc.identity(), redacted = matches.len(), "PII redacted");
        } else {
            warn!(identity = doc.identity(), "Redaction edit was rejected");
        }
        Ok(applied)
    }

    /// Redact `text` without touching any document.
    pub fn redacted_text(&self, text: &str, matches: &[PiiMatch]) -> String {
        self.redaction.redact(text, matches)
    }

    /// Per-category tally of `matches`.
    pub fn summarize(matches: &[DocumentMatch]) -> ScanSummary {
        ScanSummary::from_matches(matches.iter().map(|m| &m.pii))
    }

    /// Remove every diagnostic published for `identity`.
    pub async fn clear_diagnostics(&self, identity: &str) -> Result<()> {
        self.state.diagnostics.clear(identity).await
    }

    /// Number of scans waiting out their debounce delay.
    pub fn pending_scans(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Cancel pending scans and stop accepting new ones.
    pub fn dispose(&self) {
        self.scheduler.dispose();
        debug!("PII diagnostics service disposed");
    }

    /// Whether the service has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.scheduler.is_disposed()
    }
}
