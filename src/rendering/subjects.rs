//! Records grouped by subject, with each subject's entity kind.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::{EntityKind, ProjectedRecord};

/// Why a subject was left out of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No type record at all.
    Untyped,
    /// A type record whose label is not a known entity kind.
    UnknownType(String),
    /// More than one distinct type label.
    ConflictingTypes(Vec<String>),
    /// Referenced from a list but has no `name` or `title` record.
    Unnamed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Untyped => write!(f, "no type record"),
            SkipReason::UnknownType(label) => write!(f, "unknown type '{}'", label),
            SkipReason::ConflictingTypes(labels) => {
                write!(f, "conflicting types: {}", labels.join(", "))
            }
            SkipReason::Unnamed => write!(f, "no name"),
        }
    }
}

/// Projected records grouped by subject label, in subject-label order.
#[derive(Debug, Default)]
pub struct SubjectIndex<'a> {
    groups: BTreeMap<&'a str, Vec<&'a ProjectedRecord>>,
    kinds: BTreeMap<&'a str, EntityKind>,
    skipped: Vec<(&'a str, SkipReason)>,
}

impl<'a> SubjectIndex<'a> {
    pub fn build(records: &'a [ProjectedRecord]) -> Self {
        let mut groups: BTreeMap<&'a str, Vec<&'a ProjectedRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.subject.as_str()).or_default().push(record);
        }

        let mut kinds = BTreeMap::new();
        let mut skipped = Vec::new();
        for (subject, group) in &groups {
            let mut labels: Vec<&str> =
                group.iter().filter(|r| r.is_type()).map(|r| r.object.as_str()).collect();
            labels.sort_unstable();
            labels.dedup();

            match labels.as_slice() {
                [] => skipped.push((*subject, SkipReason::Untyped)),
                [label] => match EntityKind::from_label(label) {
                    Some(kind) => {
                        kinds.insert(*subject, kind);
                    }
                    None => skipped.push((*subject, SkipReason::UnknownType(label.to_string()))),
                },
                many => skipped.push((
                    *subject,
                    SkipReason::ConflictingTypes(many.iter().map(|l| l.to_string()).collect()),
                )),
            }
        }

        Self { groups, kinds, skipped }
    }

    pub fn subjects(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    pub fn kind(&self, subject: &str) -> Option<EntityKind> {
        self.kinds.get(subject).copied()
    }

    /// Classified subjects of `kind`, in subject-label order.
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &'a str> + '_ {
        self.kinds.iter().filter(move |(_, k)| **k == kind).map(|(s, _)| *s)
    }

    pub fn first_of(&self, kind: EntityKind) -> Option<&'a str> {
        self.of_kind(kind).next()
    }

    pub fn records(&self, subject: &str) -> &[&'a ProjectedRecord] {
        self.groups.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.groups.contains_key(subject)
    }

    /// Object of the first record of `subject` with the given attribute.
    pub fn value(&self, subject: &str, attribute: &str) -> Option<&'a str> {
        self.records(subject)
            .iter()
            .copied()
            .find(|r| r.attribute() == attribute)
            .map(|r| r.object.as_str())
    }

    /// Objects of every record of `subject` with the given attribute.
    pub fn values<'s>(
        &'s self,
        subject: &str,
        attribute: &'s str,
    ) -> impl Iterator<Item = &'a str> + 's {
        self.records(subject)
            .iter()
            .copied()
            .filter(move |r| r.attribute() == attribute)
            .map(|r| r.object.as_str())
    }

    /// The subject's `name`, or its `title` when it has no name.
    pub fn name(&self, subject: &str) -> Option<&'a str> {
        self.records(subject)
            .iter()
            .copied()
            .find(|r| matches!(r.attribute(), "name" | "title"))
            .map(|r| r.object.as_str())
    }

    pub fn skipped(&self) -> &[(&'a str, SkipReason)] {
        &self.skipped
    }
}
