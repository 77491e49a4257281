use std::collections::BTreeMap;

use ontomap_model::{EntityIdPattern, LabelLiteral, OntologyEntity, RawOntologyElement};

/// Extracts and merges [`OntologyEntity`] records from raw source elements.
pub struct OntologyExtractor {
    id_pattern: EntityIdPattern,
    primary_lang: String,
}

impl OntologyExtractor {
    /// Creates an extractor for the given identifier shape, keeping labels
    /// tagged with `primary_lang` (or untagged).
    pub fn new(id_pattern: EntityIdPattern, primary_lang: impl Into<String>) -> Self {
        Self {
            id_pattern,
            primary_lang: primary_lang.into(),
        }
    }

    /// An extractor for the Units Ontology with English labels.
    pub fn uo() -> Self {
        Self::new(EntityIdPattern::uo(), "en")
    }

    /// Extracts one entity per valid uri observed across `elements`.
    ///
    /// Elements with an out-of-namespace or malformed uri are skipped, not
    /// reported. Repeated declarations of the same uri are merged per the
    /// entity invariant: synonym-set union, sticky deprecation, first
    /// non-empty label/definition. Output is ordered by uri.
    pub fn extract(&self, elements: &[RawOntologyElement]) -> Vec<OntologyEntity> {
        let mut merged: BTreeMap<&str, OntologyEntity> = BTreeMap::new();
        for element in elements {
            let Some(entity) = self.entity_from(element) else {
                continue;
            };
            match merged.get_mut(element.uri.as_str()) {
                Some(existing) => existing.merge(entity),
                None => {
                    merged.insert(element.uri.as_str(), entity);
                }
            }
        }
        merged.into_values().collect()
    }

    /// Builds an entity from one element, or `None` when the identifier does
    /// not match the ontology's canonical shape.
    pub fn entity_from(&self, element: &RawOntologyElement) -> Option<OntologyEntity> {
        let local_id = self.id_pattern.local_id(&element.uri)?;
        let mut entity = OntologyEntity::new(element.uri.clone(), local_id);

        entity.label = self.primary_label(&element.labels);
        entity.definition = element
            .definition
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from);

        collect_synonyms(&element.exact_synonyms, &mut entity.exact_synonyms);
        collect_synonyms(&element.related_synonyms, &mut entity.related_synonyms);
        collect_synonyms(&element.narrow_synonyms, &mut entity.narrow_synonyms);

        entity.deprecated = element.deprecated;
        for parent in &element.parent_refs {
            if self.id_pattern.matches(parent) {
                entity.parent_ids.insert(parent.clone());
            }
        }
        Some(entity)
    }

    /// First non-blank literal whose tag is absent or is/extends the primary
    /// language (`en` accepts `en` and `en-GB`).
    fn primary_label(&self, labels: &[LabelLiteral]) -> Option<String> {
        labels
            .iter()
            .filter(|literal| self.lang_is_primary(literal.lang.as_deref()))
            .map(|literal| literal.text.trim())
            .find(|text| !text.is_empty())
            .map(String::from)
    }

    fn lang_is_primary(&self, lang: Option<&str>) -> bool {
        match lang {
            None => true,
            Some(tag) => {
                tag.eq_ignore_ascii_case(&self.primary_lang)
                    || tag
                        .split_once('-')
                        .is_some_and(|(base, _)| base.eq_ignore_ascii_case(&self.primary_lang))
            }
        }
    }
}

fn collect_synonyms(raw: &[String], out: &mut std::collections::BTreeSet<String>) {
    for synonym in raw {
        let trimmed = synonym.trim();
        if !trimmed.is_empty() {
            out.insert(trimmed.to_string());
        }
    }
}
