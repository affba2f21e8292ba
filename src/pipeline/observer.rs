//! Observation hooks called at fixed points of the pipeline.

use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::core::ProjectedRecord;
use crate::rendering::{Chunk, SkipReason};

/// Receives pipeline progress. Every hook defaults to doing nothing.
pub trait PipelineObserver {
    fn on_facts_loaded(&self, _facts: usize) {}

    fn on_records_projected(&self, _records: &[ProjectedRecord]) {}

    fn on_subject_skipped(&self, _subject: &str, _reason: &SkipReason) {}

    fn on_chunk_rendered(&self, _chunk: &Chunk) {}

    fn on_artifact_written(&self, _path: &Path, _bytes: usize) {}
}

impl<T: PipelineObserver + ?Sized> PipelineObserver for Arc<T> {
    fn on_facts_loaded(&self, facts: usize) {
        (**self).on_facts_loaded(facts);
    }

    fn on_records_projected(&self, records: &[ProjectedRecord]) {
        (**self).on_records_projected(records);
    }

    fn on_subject_skipped(&self, subject: &str, reason: &SkipReason) {
        (**self).on_subject_skipped(subject, reason);
    }

    fn on_chunk_rendered(&self, chunk: &Chunk) {
        (**self).on_chunk_rendered(chunk);
    }

    fn on_artifact_written(&self, path: &Path, bytes: usize) {
        (**self).on_artifact_written(path, bytes);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Forwards every hook to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_facts_loaded(&self, facts: usize) {
        info!(facts, "knowledge graph loaded");
    }

    fn on_records_projected(&self, records: &[ProjectedRecord]) {
        info!(records = records.len(), "facts projected");
        for record in records {
            debug!(%record, "projected");
        }
    }

    fn on_subject_skipped(&self, subject: &str, reason: &SkipReason) {
        warn!(subject, %reason, "subject skipped");
    }

    fn on_chunk_rendered(&self, chunk: &Chunk) {
        debug!(section = %chunk.section, subject = %chunk.subject, "chunk rendered");
    }

    fn on_artifact_written(&self, path: &Path, bytes: usize) {
        info!(path = %path.display(), bytes, "artifact written");
    }
}

/// Pipeline event as recorded by [`CollectingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    FactsLoaded(usize),
    RecordsProjected(usize),
    SubjectSkipped(String, SkipReason),
    ChunkRendered(String),
    ArtifactWritten(usize),
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    events: Mutex<Vec<PipelineEvent>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    fn push(&self, event: PipelineEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl PipelineObserver for CollectingObserver {
    fn on_facts_loaded(&self, facts: usize) {
        self.push(PipelineEvent::FactsLoaded(facts));
    }

    fn on_records_projected(&self, records: &[ProjectedRecord]) {
        self.push(PipelineEvent::RecordsProjected(records.len()));
    }

    fn on_subject_skipped(&self, subject: &str, reason: &SkipReason) {
        self.push(PipelineEvent::SubjectSkipped(subject.to_string(), reason.clone()));
    }

    fn on_chunk_rendered(&self, chunk: &Chunk) {
        self.push(PipelineEvent::ChunkRendered(chunk.subject.clone()));
    }

    fn on_artifact_written(&self, _path: &Path, bytes: usize) {
        self.push(PipelineEvent::ArtifactWritten(bytes));
    }
}
