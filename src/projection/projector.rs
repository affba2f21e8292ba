//! Projects store facts into flat labelled records.

use oxigraph::model::{TermRef, TripleRef};

use crate::core::{predicate_label, LabelPolicy, ProjectedRecord};
use crate::store::TripleStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct TripleProjector {
    policy: LabelPolicy,
}

impl TripleProjector {
    pub fn new(policy: LabelPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LabelPolicy {
        self.policy
    }

    /// One record per fact, sorted by (subject, predicate, object).
    pub fn project(&self, store: &TripleStore) -> Vec<ProjectedRecord> {
        let mut records: Vec<ProjectedRecord> =
            store.facts().map(|triple| self.project_fact(triple)).collect();
        records.sort();
        records
    }

    pub fn project_fact(&self, triple: TripleRef<'_>) -> ProjectedRecord {
        ProjectedRecord {
            subject: self.term_label(triple.subject.into()),
            predicate: predicate_label(triple.predicate.as_str()),
            object: self.term_label(triple.object),
        }
    }

    fn term_label(&self, term: TermRef<'_>) -> String {
        match term {
            TermRef::NamedNode(node) => self.policy.label(node.as_str()),
            TermRef::Literal(literal) => literal.value().to_string(),
            other => other.to_string(),
        }
    }
}

/// Project every fact of `store` with the given label policy.
pub fn project(store: &TripleStore, policy: LabelPolicy) -> Vec<ProjectedRecord> {
    TripleProjector::new(policy).project(store)
}
