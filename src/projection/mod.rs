//! Triple projection

pub mod projector;

pub use projector::{project, TripleProjector};
