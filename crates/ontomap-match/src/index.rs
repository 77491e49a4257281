//! Frozen lookup indices over extracted ontology entities.

use std::collections::BTreeMap;

use ontomap_model::{OntologyEntity, Provenance};

use crate::normalize::{
    is_ambiguous_prefix_symbol, is_category_label, is_power_of_ten_synonym, is_prefix_word,
    is_symbol_like, normalize_name, normalize_symbol,
};

/// One lookup hit: an entity position plus the field that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Position into [`LookupIndex::entities`].
    pub entity: usize,
    pub provenance: Provenance,
}

/// The two immutable lookup maps the engine probes.
///
/// Built once per run, then frozen: construction is the initialization
/// barrier, and afterwards the index is shared read-only across threads.
/// Entities are sorted by uri before indexing, so bucket order — and with it
/// "first candidate" — is reproducible.
#[derive(Debug, Default)]
pub struct LookupIndex {
    entities: Vec<OntologyEntity>,
    name_index: BTreeMap<String, Vec<IndexEntry>>,
    symbol_index: BTreeMap<String, Vec<IndexEntry>>,
}

impl LookupIndex {
    /// Builds both indices from extracted entities.
    ///
    /// Excluded up front, contributing nothing at all: deprecated entities,
    /// entities labelled with a bare category placeholder ("unit",
    /// "base unit", "prefix"), and entities labelled with a bare SI/binary
    /// prefix word. Power-of-ten synonyms are skipped; symbol-like synonyms
    /// additionally land in the symbol index unless they are a single
    /// ambiguous prefix letter.
    pub fn build(mut entities: Vec<OntologyEntity>) -> Self {
        entities.sort_by(|a, b| a.uri.cmp(&b.uri));

        let mut name_index: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();
        let mut symbol_index: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();

        for (position, entity) in entities.iter().enumerate() {
            if entity.deprecated {
                continue;
            }
            let normalized_label = normalize_name(entity.label.as_deref().unwrap_or(""));
            if is_category_label(&normalized_label) || is_prefix_word(&normalized_label) {
                continue;
            }

            if !normalized_label.is_empty() {
                name_index
                    .entry(normalized_label)
                    .or_default()
                    .push(IndexEntry {
                        entity: position,
                        provenance: Provenance::Label,
                    });
            }

            let synonym_kinds = [
                (&entity.exact_synonyms, Provenance::ExactSynonym),
                (&entity.related_synonyms, Provenance::RelatedSynonym),
                (&entity.narrow_synonyms, Provenance::NarrowSynonym),
            ];
            for (synonyms, provenance) in synonym_kinds {
                for synonym in synonyms {
                    let trimmed = synonym.trim();
                    if trimmed.is_empty() || is_power_of_ten_synonym(trimmed) {
                        continue;
                    }

                    let normalized = normalize_name(trimmed);
                    if !normalized.is_empty() {
                        name_index.entry(normalized).or_default().push(IndexEntry {
                            entity: position,
                            provenance,
                        });
                    }

                    if is_symbol_like(trimmed) && !is_ambiguous_prefix_symbol(trimmed) {
                        let symbol = normalize_symbol(trimmed);
                        if !symbol.is_empty() {
                            symbol_index.entry(symbol).or_default().push(IndexEntry {
                                entity: position,
                                provenance,
                            });
                        }
                    }
                }
            }
        }

        Self {
            entities,
            name_index,
            symbol_index,
        }
    }

    /// Entities in index order (sorted by uri).
    pub fn entities(&self) -> &[OntologyEntity] {
        &self.entities
    }

    pub fn entity(&self, position: usize) -> &OntologyEntity {
        &self.entities[position]
    }

    /// Bucket for an already-normalized name, empty when absent.
    pub fn lookup_name(&self, normalized: &str) -> &[IndexEntry] {
        self.name_index
            .get(normalized)
            .map_or(&[], Vec::as_slice)
    }

    /// Bucket for an already-normalized symbol, empty when absent.
    pub fn lookup_symbol(&self, normalized: &str) -> &[IndexEntry] {
        self.symbol_index
            .get(normalized)
            .map_or(&[], Vec::as_slice)
    }

    pub fn name_key_count(&self) -> usize {
        self.name_index.len()
    }

    pub fn symbol_key_count(&self) -> usize {
        self.symbol_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(uri: &str, label: &str) -> OntologyEntity {
        let mut entity = OntologyEntity::new(uri, uri.rsplit(':').next().unwrap());
        if !label.is_empty() {
            entity.label = Some(label.to_string());
        }
        entity
    }

    #[test]
    fn deprecated_and_category_entities_are_excluded() {
        let mut obsolete = entity("u:1", "cubit");
        obsolete.deprecated = true;
        let mut category = entity("u:2", "Unit");
        category.exact_synonyms.insert("u".to_string());
        let prefix = entity("u:3", "kilo");
        let kept = entity("u:4", "metre");

        let index = LookupIndex::build(vec![obsolete, category, prefix, kept]);
        assert!(index.lookup_name("cubit").is_empty());
        assert!(index.lookup_name("unit").is_empty());
        assert!(index.lookup_name("kilo").is_empty());
        // Synonyms of excluded entities are gone too.
        assert!(index.lookup_symbol("u").is_empty());
        assert_eq!(index.lookup_name("metre").len(), 1);
    }

    #[test]
    fn buckets_are_ordered_by_uri() {
        let mut second = entity("u:b", "newton");
        second.exact_synonyms.insert("N".to_string());
        let mut first = entity("u:a", "");
        first.related_synonyms.insert("newton".to_string());

        // Insertion order reversed relative to uri order.
        let index = LookupIndex::build(vec![second, first]);
        let bucket = index.lookup_name("newton");
        assert_eq!(bucket.len(), 2);
        assert_eq!(index.entity(bucket[0].entity).uri, "u:a");
        assert_eq!(bucket[0].provenance, Provenance::RelatedSynonym);
        assert_eq!(index.entity(bucket[1].entity).uri, "u:b");
        assert_eq!(bucket[1].provenance, Provenance::Label);
    }

    #[test]
    fn symbol_index_applies_the_likeness_heuristic() {
        let mut pascal = entity("u:pa", "pascal");
        pascal.exact_synonyms.insert("Pa".to_string());
        pascal.exact_synonyms.insert("pascals".to_string());
        let mut metre = entity("u:m", "metre");
        metre.exact_synonyms.insert("m".to_string());
        let mut kilo = entity("u:k", "kilogram");
        kilo.exact_synonyms.insert("10^[3]".to_string());

        let index = LookupIndex::build(vec![pascal, metre, kilo]);
        assert_eq!(index.lookup_symbol("Pa").len(), 1);
        // Word-like synonym indexed by name only.
        assert!(index.lookup_symbol("pascals").is_empty());
        assert_eq!(index.lookup_name("pascals").len(), 1);
        // Single ambiguous prefix letter excluded from symbols.
        assert!(index.lookup_symbol("m").is_empty());
        // Power-of-ten synonyms are skipped entirely.
        assert!(index.lookup_name("10^[3]").is_empty());
        assert!(index.lookup_symbol("10^[3]").is_empty());
    }
}
