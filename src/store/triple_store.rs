//! Append-only in-memory triple store backed by the Oxigraph RDF model

use oxigraph::model::{Graph, NamedNode, Term, TermRef, Triple, TripleRef};
use std::collections::BTreeMap;

use crate::core::namespace::{self, compact_iri};
use crate::core::EntityKind;
use crate::error::{Error, Result};

/// Set of facts plus the explicit kind of every declared entity.
#[derive(Debug, Default, Clone)]
pub struct TripleStore {
    graph: Graph,
    kinds: BTreeMap<String, EntityKind>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fact. Identical facts collapse into one.
    pub fn add_fact(&mut self, subject: &NamedNode, predicate: &NamedNode, object: impl Into<Term>) {
        let triple = Triple::new(subject.clone(), predicate.clone(), object);
        self.graph.insert(&triple);
    }

    /// Tag `entity` with `kind` and assert the matching `rdf:type` fact.
    ///
    /// An entity carries exactly one kind; redeclaring it with another kind fails.
    pub fn declare(&mut self, entity: &NamedNode, kind: EntityKind) -> Result<()> {
        if let Some(existing) = self.kinds.get(entity.as_str()) {
            if *existing != kind {
                return Err(Error::ConflictingType {
                    entity: entity.as_str().to_string(),
                    existing: *existing,
                    requested: kind,
                });
            }
        }
        self.kinds.insert(entity.as_str().to_string(), kind);
        self.add_fact(entity, &namespace::rdf_type(), kind.class_iri());
        Ok(())
    }

    /// Every fact in the store, in unspecified order.
    pub fn facts(&self) -> impl Iterator<Item = TripleRef<'_>> + '_ {
        self.graph.iter()
    }

    pub fn kind_of(&self, entity: &str) -> Option<EntityKind> {
        self.kinds.get(entity).copied()
    }

    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &str> + '_ {
        self.kinds.iter().filter(move |(_, k)| **k == kind).map(|(iri, _)| iri.as_str())
    }

    /// Number of declared entities per kind.
    pub fn entity_counts(&self) -> BTreeMap<EntityKind, usize> {
        let mut counts = BTreeMap::new();
        for kind in self.kinds.values() {
            *counts.entry(*kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Facts as sorted `prefix:local` lines, for inspection.
    pub fn fact_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .facts()
            .map(|triple| {
                let subject: TermRef<'_> = triple.subject.into();
                format!(
                    "{} {} {} .",
                    term_text(subject),
                    compact_iri(triple.predicate.as_str()),
                    term_text(triple.object)
                )
            })
            .collect();
        lines.sort();
        lines
    }
}

fn term_text(term: TermRef<'_>) -> String {
    match term {
        TermRef::NamedNode(node) => compact_iri(node.as_str()),
        TermRef::Literal(literal) => format!("\"{}\"", literal.value()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::namespace::{ART, DC, PERSON};
    use oxigraph::model::Literal;

    #[test]
    fn test_add_fact_and_len() {
        let mut store = TripleStore::new();
        assert!(store.is_empty());

        let mona_lisa = ART.term("MonaLisa");
        store.add_fact(&mona_lisa, &DC.term("title"), Literal::new_simple_literal("Мона Лиза"));
        store.add_fact(&mona_lisa, &DC.term("creator"), PERSON.term("LeonardoDaVinci"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.facts().count(), 2);
    }

    #[test]
    fn test_identical_facts_collapse() {
        let mut store = TripleStore::new();
        let louvre = ART.term("Louvre");
        store.add_fact(&louvre, &DC.term("title"), Literal::new_simple_literal("Лувр"));
        store.add_fact(&louvre, &DC.term("title"), Literal::new_simple_literal("Лувр"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_declare_adds_type_fact() {
        let mut store = TripleStore::new();
        let louvre = ART.term("Louvre");
        store.declare(&louvre, EntityKind::Museum).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.kind_of(louvre.as_str()), Some(EntityKind::Museum));
        assert_eq!(store.fact_lines(), vec!["art:Louvre rdf:type art:Museum .".to_string()]);
    }

    #[test]
    fn test_declare_rejects_conflicting_kind() {
        let mut store = TripleStore::new();
        let louvre = ART.term("Louvre");
        store.declare(&louvre, EntityKind::Museum).unwrap();
        store.declare(&louvre, EntityKind::Museum).unwrap();

        let err = store.declare(&louvre, EntityKind::Painting).unwrap_err();
        assert!(matches!(err, Error::ConflictingType { .. }));
        assert_eq!(store.kind_of(louvre.as_str()), Some(EntityKind::Museum));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_entities_of_kind() {
        let mut store = TripleStore::new();
        store.declare(&PERSON.term("Bob"), EntityKind::Person).unwrap();
        store.declare(&PERSON.term("Alice"), EntityKind::Person).unwrap();
        store.declare(&ART.term("Louvre"), EntityKind::Museum).unwrap();

        let people: Vec<&str> = store.entities_of(EntityKind::Person).collect();
        assert_eq!(
            people,
            vec!["http://example.org/person/Alice", "http://example.org/person/Bob"]
        );
        assert_eq!(store.entity_counts().get(&EntityKind::Person), Some(&2));
    }
}
