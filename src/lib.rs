//! # rdfkb
//!
//! rdfkb turns a small RDF knowledge graph about a painting, its author, a
//! museum, a film and a handful of people into plain-text knowledge chunks for
//! retrieval-augmented question answering.
//!
//! The pipeline runs in four steps:
//!
//! - load the seed facts into an in-memory [`store::TripleStore`]
//! - project every fact into a readable [`core::ProjectedRecord`]
//! - render one chunk per entity with [`rendering::ChunkRenderer`]
//! - write the chunks to a timestamped artifact with [`output::write_artifact`]
//!
//! A separate [`relay`] module forwards chat questions to a remote prediction
//! service, which is expected to answer from that artifact.
//!
//! ## Example
//!
//! ```rust
//! use rdfkb::pipeline::{NoopObserver, Pipeline};
//!
//! fn example() -> rdfkb::Result<()> {
//!     let report = Pipeline::default().with_observer(Box::new(NoopObserver)).run()?;
//!     assert_eq!(report.chunks.len(), 7);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Core data structures and types
pub mod core;

/// Configuration management
pub mod config;

pub mod error;

/// Seed fact loading
pub mod loading;

/// Knowledge-base artifact output
pub mod output;

/// End-to-end pipeline and its observation hooks
pub mod pipeline;

/// Fact projection into readable records
pub mod projection;

/// Prediction relay
pub mod relay;

/// Chunk rendering
pub mod rendering;

/// Module for handling RDF stores
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};

