//! Plausibility validation for symbol-based candidates.

use ontomap_model::OntologyEntity;

use crate::normalize::word_tokens;

/// Validates that a symbol hit is semantically related to the record, not a
/// coincidental collision — farad (F) must not match degree Fahrenheit (F),
/// footlambert (fl) must not match femtoliter (fl).
///
/// Accepts when any of the following holds:
/// - the dataset name and the candidate's label/exact/related synonyms share
///   a word of ≥3 letters;
/// - the dataset name and the candidate label are non-empty substrings of
///   one another ("tonne" contains "ton");
/// - a ≥3-letter word from one side is a substring of a ≥3-letter word from
///   the other (plural and compound forms);
/// - a ≥4-letter word from the dataset name appears in the candidate's
///   definition.
pub fn symbol_match_is_plausible(dataset_name: &str, entity: &OntologyEntity) -> bool {
    let label = entity.label.as_deref().unwrap_or("").to_lowercase();
    let name = dataset_name.to_lowercase();

    let name_words = word_tokens(&name, 3);

    let mut entity_text = label.clone();
    for synonym in entity
        .exact_synonyms
        .iter()
        .chain(entity.related_synonyms.iter())
    {
        entity_text.push(' ');
        entity_text.push_str(&synonym.to_lowercase());
    }
    let entity_words = word_tokens(&entity_text, 3);

    if name_words.intersection(&entity_words).next().is_some() {
        return true;
    }

    if !label.is_empty() && !name.is_empty() && (name.contains(&label) || label.contains(&name)) {
        return true;
    }

    for name_word in &name_words {
        for entity_word in &entity_words {
            if name_word.contains(entity_word.as_str()) || entity_word.contains(name_word.as_str())
            {
                return true;
            }
        }
    }

    if let Some(definition) = entity.definition.as_deref() {
        let definition = definition.to_lowercase();
        if name_words
            .iter()
            .any(|word| word.len() >= 4 && definition.contains(word.as_str()))
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(label: &str) -> OntologyEntity {
        let mut entity = OntologyEntity::new("u:x", "x");
        entity.label = Some(label.to_string());
        entity
    }

    #[test]
    fn shared_word_is_plausible() {
        assert!(symbol_match_is_plausible(
            "degree fahrenheit",
            &entity("degree Fahrenheit")
        ));
    }

    #[test]
    fn substring_label_is_plausible() {
        assert!(symbol_match_is_plausible("tonne", &entity("ton")));
        assert!(symbol_match_is_plausible("ton", &entity("tonne")));
    }

    #[test]
    fn word_level_substring_is_plausible() {
        // Plural form: "farads" vs "farad".
        assert!(symbol_match_is_plausible("farads", &entity("farad")));
    }

    #[test]
    fn definition_word_is_plausible() {
        let mut candidate = entity("S unit");
        candidate.definition =
            Some("A unit used to express signal strength in radio reception.".to_string());
        assert!(symbol_match_is_plausible("signal strength", &candidate));
    }

    #[test]
    fn unrelated_names_are_rejected() {
        assert!(!symbol_match_is_plausible(
            "farad",
            &entity("degree Fahrenheit")
        ));
        assert!(!symbol_match_is_plausible("footlambert", &entity("femtoliter")));
    }

    #[test]
    fn synonyms_count_toward_shared_words() {
        let mut candidate = entity("degree Fahrenheit");
        candidate
            .exact_synonyms
            .insert("fahrenheit".to_string());
        assert!(symbol_match_is_plausible("fahrenheit", &candidate));
    }
}
