//! Fact loading

pub mod seed;

pub use seed::load_seed_data;
