//! Ontology entity model.
//!
//! An [`OntologyEntity`] is one logical vocabulary class, keyed by its `uri`.
//! Ontology sources may declare the same class across several elements (a
//! class element plus later description elements amending it); the extractor
//! collapses those declarations with [`OntologyEntity::merge`], which is an
//! associative operation so the result does not depend on how the
//! declarations are grouped.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single ontology class with the fields relevant to unit reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyEntity {
    /// Full identifier, unique per logical entity (e.g.
    /// `http://purl.obolibrary.org/obo/UO_0000122`).
    pub uri: String,

    /// Last path segment of the identifier (e.g. `UO_0000122`).
    pub local_id: String,

    /// Primary-language display label, when the source declares one.
    pub label: Option<String>,

    /// Free-text definition, when the source declares one.
    pub definition: Option<String>,

    /// Synonyms marked exact by the source.
    #[serde(default)]
    pub exact_synonyms: BTreeSet<String>,

    /// Synonyms marked related by the source.
    #[serde(default)]
    pub related_synonyms: BTreeSet<String>,

    /// Synonyms marked narrow by the source.
    #[serde(default)]
    pub narrow_synonyms: BTreeSet<String>,

    /// True when any declaration flags the entity as obsolete.
    #[serde(default)]
    pub deprecated: bool,

    /// Parent class uris. Informational only; matching never follows them.
    #[serde(default)]
    pub parent_ids: BTreeSet<String>,
}

impl OntologyEntity {
    /// Creates an empty entity for the given identifier.
    pub fn new(uri: impl Into<String>, local_id: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            local_id: local_id.into(),
            label: None,
            definition: None,
            exact_synonyms: BTreeSet::new(),
            related_synonyms: BTreeSet::new(),
            narrow_synonyms: BTreeSet::new(),
            deprecated: false,
            parent_ids: BTreeSet::new(),
        }
    }

    /// Folds a later declaration of the same entity into this one.
    ///
    /// Synonym and parent sets are unioned, `deprecated` is sticky once true,
    /// and the first non-empty `label`/`definition` wins. Both sides must
    /// carry the same `uri`; the other side's identifier fields are
    /// discarded.
    pub fn merge(&mut self, other: OntologyEntity) {
        if self.label.is_none() {
            self.label = other.label;
        }
        if self.definition.is_none() {
            self.definition = other.definition;
        }
        self.exact_synonyms.extend(other.exact_synonyms);
        self.related_synonyms.extend(other.related_synonyms);
        self.narrow_synonyms.extend(other.narrow_synonyms);
        self.parent_ids.extend(other.parent_ids);
        self.deprecated |= other.deprecated;
    }

    /// True when the entity carries no name material usable for indexing.
    pub fn is_nameless(&self) -> bool {
        self.label.is_none()
            && self.exact_synonyms.is_empty()
            && self.related_synonyms.is_empty()
            && self.narrow_synonyms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(uri: &str) -> OntologyEntity {
        OntologyEntity::new(uri, uri.rsplit('/').next().unwrap())
    }

    #[test]
    fn merge_is_idempotent() {
        let mut left = entity("obo/UO_0000001");
        left.label = Some("metre".to_string());
        left.exact_synonyms.insert("meter".to_string());
        left.deprecated = true;

        let mut merged = left.clone();
        merged.merge(left.clone());
        assert_eq!(merged, left);
    }

    #[test]
    fn merge_keeps_first_label_and_unions_synonyms() {
        let mut first = entity("obo/UO_0000002");
        first.label = Some("litre".to_string());
        first.exact_synonyms.insert("liter".to_string());

        let mut second = entity("obo/UO_0000002");
        second.label = Some("liter (US)".to_string());
        second.exact_synonyms.insert("L".to_string());
        second.related_synonyms.insert("cubic decimetre".to_string());

        first.merge(second);
        assert_eq!(first.label.as_deref(), Some("litre"));
        assert!(first.exact_synonyms.contains("liter"));
        assert!(first.exact_synonyms.contains("L"));
        assert!(first.related_synonyms.contains("cubic decimetre"));
    }

    #[test]
    fn merge_deprecated_is_sticky() {
        let mut active = entity("obo/UO_0000003");
        let mut obsolete = entity("obo/UO_0000003");
        obsolete.deprecated = true;

        active.merge(obsolete);
        assert!(active.deprecated);

        let mut still = active.clone();
        still.merge(entity("obo/UO_0000003"));
        assert!(still.deprecated);
    }
}
