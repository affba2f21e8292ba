//! Namespaces used by the seed knowledge graph

use oxigraph::model::NamedNode;

/// An IRI prefix bound to a short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    prefix: &'static str,
    base: &'static str,
}

impl Namespace {
    pub const fn new(prefix: &'static str, base: &'static str) -> Self {
        Self { prefix, base }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Build the identifier `<base><local>`.
    ///
    /// Local names are plain ASCII identifiers, so the result is always a valid IRI.
    pub fn term(&self, local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", self.base, local))
    }

    /// Compact form `prefix:local` if `iri` lives in this namespace.
    pub fn compact(&self, iri: &str) -> Option<String> {
        iri.strip_prefix(self.base).map(|local| format!("{}:{}", self.prefix, local))
    }
}

pub const RDF: Namespace = Namespace::new("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
pub const FOAF: Namespace = Namespace::new("foaf", "http://xmlns.com/foaf/0.1/");
pub const DC: Namespace = Namespace::new("dc", "http://purl.org/dc/elements/1.1/");
pub const SKOS: Namespace = Namespace::new("skos", "http://www.w3.org/2004/02/skos/core#");

pub const ART: Namespace = Namespace::new("art", "http://example.org/art/");
pub const PERSON: Namespace = Namespace::new("person", "http://example.org/person/");
pub const BIO: Namespace = Namespace::new("bio", "http://example.org/bio/");
pub const MEDIA: Namespace = Namespace::new("media", "http://example.org/media/");

/// Every namespace bound by the seed graph, standard vocabularies first.
pub const BOUND: [Namespace; 8] = [RDF, FOAF, DC, SKOS, ART, PERSON, BIO, MEDIA];

/// `rdf:type`
pub fn rdf_type() -> NamedNode {
    RDF.term("type")
}

/// Shorten an IRI with the first bound namespace that matches.
pub fn compact_iri(iri: &str) -> String {
    BOUND
        .iter()
        .find_map(|ns| ns.compact(iri))
        .unwrap_or_else(|| format!("<{}>", iri))
}
