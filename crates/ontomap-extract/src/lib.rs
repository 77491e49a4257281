//! Ontology entity extraction.
//!
//! Turns raw parsed ontology elements into a deduplicated set of
//! [`OntologyEntity`] records. Elements whose identifier does not match the
//! ontology's canonical shape are dropped silently; repeated declarations of
//! the same uri are folded together with [`OntologyEntity::merge`].

mod extractor;

pub use extractor::OntologyExtractor;
