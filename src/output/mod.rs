//! Artifact output

pub mod writer;

pub use writer::{
    parse_artifact, read_artifact, render_artifact, write_artifact, write_artifact_at, Artifact,
};
