//! Short display labels for identifiers and predicates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::namespace;
use super::EntityKind;

/// Label of the `rdf:type` predicate, kept in its historical short form.
pub const TYPE_PREDICATE_LABEL: &str = "22-rdf-syntax-ns#type";

/// How identifiers are turned into display labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Class IRIs of known entity kinds get the kind label, everything else its local name.
    #[default]
    Declared,
    /// Substring match on the IRI text: `Person`, `Movie`, `Painting`, `Museum`, first hit wins.
    Lexical,
}

impl LabelPolicy {
    pub fn label(self, iri: &str) -> String {
        match self {
            LabelPolicy::Declared => declared_label(iri),
            LabelPolicy::Lexical => lexical_label(iri),
        }
    }
}

impl FromStr for LabelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "declared" => Ok(LabelPolicy::Declared),
            "lexical" => Ok(LabelPolicy::Lexical),
            other => Err(format!("unknown label policy '{}' (expected declared or lexical)", other)),
        }
    }
}

impl fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelPolicy::Declared => f.write_str("declared"),
            LabelPolicy::Lexical => f.write_str("lexical"),
        }
    }
}

/// Last `/`-separated segment of an IRI.
pub fn local_name(iri: &str) -> &str {
    iri.rsplit('/').next().unwrap_or(iri)
}

pub fn declared_label(iri: &str) -> String {
    match EntityKind::from_class_iri(iri) {
        Some(kind) => kind.label().to_string(),
        None => local_name(iri).to_string(),
    }
}

pub fn lexical_label(iri: &str) -> String {
    EntityKind::ALL
        .into_iter()
        .find(|kind| iri.contains(kind.marker()))
        .map_or_else(|| local_name(iri).to_string(), |kind| kind.label().to_string())
}

pub fn predicate_label(iri: &str) -> String {
    if iri == namespace::rdf_type().as_str() {
        TYPE_PREDICATE_LABEL.to_string()
    } else {
        local_name(iri).to_string()
    }
}
