//! End-to-end knowledge-base pipeline: load, project, render, write.

pub mod observer;

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::core::{EntityKind, ProjectedRecord};
use crate::error::Result;
use crate::loading::load_seed_data;
use crate::output::write_artifact;
use crate::projection::TripleProjector;
use crate::rendering::{Chunk, ChunkRenderer};
use crate::store::TripleStore;

pub use observer::{
    CollectingObserver, NoopObserver, PipelineEvent, PipelineObserver, TracingObserver,
};

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub facts: usize,
    pub entities: BTreeMap<EntityKind, usize>,
    pub records: Vec<ProjectedRecord>,
    pub chunks: Vec<Chunk>,
}

pub struct Pipeline {
    config: PipelineConfig,
    observer: Box<dyn PipelineObserver>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config, observer: Box::new(TracingObserver) }
    }

    pub fn with_observer(mut self, observer: Box<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the seed store.
    pub fn load(&self) -> Result<TripleStore> {
        let mut store = TripleStore::new();
        load_seed_data(&mut store)?;
        self.observer.on_facts_loaded(store.len());
        Ok(store)
    }

    /// Load, project and render.
    pub fn run(&self) -> Result<PipelineReport> {
        let store = self.load()?;

        let records = TripleProjector::new(self.config.label_policy).project(&store);
        self.observer.on_records_projected(&records);

        let chunks = ChunkRenderer::new(self.config.render.clone())
            .render_observed(&records, self.observer.as_ref());

        Ok(PipelineReport { facts: store.len(), entities: store.entity_counts(), records, chunks })
    }

    /// [`Pipeline::run`], then write the artifact to `path`.
    pub fn run_to_file(&self, path: impl AsRef<Path>) -> Result<PipelineReport> {
        let report = self.run()?;
        let bytes = write_artifact(&report.chunks, path.as_ref())?;
        self.observer.on_artifact_written(path.as_ref(), bytes);
        Ok(report)
    }

    /// [`Pipeline::run_to_file`] with the configured output path.
    pub fn run_to_configured_output(&self) -> Result<PipelineReport> {
        let path = self.config.output_path.clone();
        self.run_to_file(path)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
