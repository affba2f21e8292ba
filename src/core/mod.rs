//! Core data structures and types for the knowledge base

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod labels;
pub mod namespace;

pub use labels::*;
pub use namespace::Namespace;

/// Explicit entity kind, attached to an entity when it is declared in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Person,
    Movie,
    Painting,
    Museum,
}

impl EntityKind {
    /// Kinds in the order the lexical labeling rule checks them.
    pub const ALL: [EntityKind; 4] =
        [EntityKind::Person, EntityKind::Movie, EntityKind::Painting, EntityKind::Museum];

    /// Display label used in projected records and chunks.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Person => "Человек",
            EntityKind::Movie => "Фильм",
            EntityKind::Painting => "Картина",
            EntityKind::Museum => "Музей",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Substring the lexical labeling rule looks for in an IRI.
    pub fn marker(self) -> &'static str {
        match self {
            EntityKind::Person => "Person",
            EntityKind::Movie => "Movie",
            EntityKind::Painting => "Painting",
            EntityKind::Museum => "Museum",
        }
    }

    /// Class IRI used as the object of this kind's `rdf:type` facts.
    pub fn class_iri(self) -> oxigraph::model::NamedNode {
        match self {
            EntityKind::Person => namespace::FOAF.term("Person"),
            EntityKind::Movie => namespace::MEDIA.term("Movie"),
            EntityKind::Painting => namespace::ART.term("Painting"),
            EntityKind::Museum => namespace::ART.term("Museum"),
        }
    }

    pub fn from_class_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class_iri().as_str() == iri)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flat, labelled view of one fact, presented to the chunk renderer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectedRecord {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl ProjectedRecord {
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
        }
    }

    /// Whether this record carries the subject's type assertion.
    pub fn is_type(&self) -> bool {
        self.predicate == TYPE_PREDICATE_LABEL
    }

    /// Predicate name without a `#`-fragment prefix (`core#altLabel` -> `altLabel`).
    pub fn attribute(&self) -> &str {
        self.predicate.rsplit_once('#').map_or(self.predicate.as_str(), |(_, name)| name)
    }

    /// Predicate label with its first character upper-cased.
    pub fn context(&self) -> String {
        let mut chars = self.predicate.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ProjectedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} --> {}", self.subject, self.predicate, self.object)
    }
}
