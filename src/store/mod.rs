//! RDF triple store

pub mod triple_store;

pub use triple_store::TripleStore;
