//! Chunk rendering

pub mod chunk;
pub mod config;
pub mod renderer;
pub mod subjects;

pub use chunk::{Chunk, Section, RULE_WIDTH};
pub use config::RenderConfig;
pub use renderer::{render_chunks, ChunkRenderer};
pub use subjects::{SkipReason, SubjectIndex};
