//! Property tests for the entity merge fold.
//!
//! The extractor relies on merge being associative (declarations may be
//! grouped arbitrarily) and on the set/flag parts being commutative.

use std::collections::BTreeSet;

use ontomap_model::OntologyEntity;
use proptest::prelude::*;

fn synonym_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-z]{1,6}", 0..4)
}

fn entity() -> impl Strategy<Value = OntologyEntity> {
    (
        proptest::option::of("[a-z ]{1,12}"),
        proptest::option::of("[a-z ]{1,24}"),
        synonym_set(),
        synonym_set(),
        synonym_set(),
        any::<bool>(),
        proptest::collection::btree_set("[a-z]{1,8}", 0..3),
    )
        .prop_map(
            |(label, definition, exact, related, narrow, deprecated, parents)| {
                let mut entity = OntologyEntity::new(
                    "http://purl.obolibrary.org/obo/UO_0000001",
                    "UO_0000001",
                );
                entity.label = label;
                entity.definition = definition;
                entity.exact_synonyms = exact;
                entity.related_synonyms = related;
                entity.narrow_synonyms = narrow;
                entity.deprecated = deprecated;
                entity.parent_ids = parents;
                entity
            },
        )
}

proptest! {
    #[test]
    fn merge_is_idempotent(declaration in entity()) {
        let mut merged = declaration.clone();
        merged.merge(declaration.clone());
        prop_assert_eq!(merged, declaration);
    }

    #[test]
    fn merge_is_associative(a in entity(), b in entity(), c in entity()) {
        let mut left = a.clone();
        left.merge(b.clone());
        left.merge(c.clone());

        let mut bc = b.clone();
        bc.merge(c.clone());
        let mut right = a.clone();
        right.merge(bc);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn sets_and_flags_commute(a in entity(), b in entity()) {
        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b.clone();
        ba.merge(a.clone());

        prop_assert_eq!(&ab.exact_synonyms, &ba.exact_synonyms);
        prop_assert_eq!(&ab.related_synonyms, &ba.related_synonyms);
        prop_assert_eq!(&ab.narrow_synonyms, &ba.narrow_synonyms);
        prop_assert_eq!(&ab.parent_ids, &ba.parent_ids);
        prop_assert_eq!(ab.deprecated, ba.deprecated);
    }
}
