//! Matching engine implementation.

use ontomap_model::{
    DatasetRecord, MatchCandidate, MatchMethod, MatchResult, MatchedEntity,
};

use crate::index::{IndexEntry, LookupIndex};
use crate::normalize::{normalize_name, normalize_symbol};
use crate::plausibility::symbol_match_is_plausible;
use crate::variants::{spelling_variants, split_per, split_shape};

/// Matches dataset records against a frozen [`LookupIndex`].
///
/// Strategies run in fixed priority order; the first strategy producing a
/// non-empty candidate set wins and later strategies are skipped. Every
/// candidate the winning strategy found is kept on the result for audit. A
/// blank record field gives its strategy no input, and the engine simply
/// advances.
///
/// Matching is a pure function of `(record, index)`: the engine holds only a
/// shared reference and no per-call state, so one engine may serve any
/// number of threads.
pub struct MatchEngine<'a> {
    index: &'a LookupIndex,
}

impl<'a> MatchEngine<'a> {
    pub fn new(index: &'a LookupIndex) -> Self {
        Self { index }
    }

    /// Runs the ordered strategy list for one record.
    pub fn match_record(&self, record: &DatasetRecord) -> MatchResult {
        let normalized_unit = normalize_name(&record.unit);

        // 1. Unit name against the name index.
        if !normalized_unit.is_empty() {
            let bucket = self.index.lookup_name(&normalized_unit);
            if !bucket.is_empty() {
                return self.resolve(record, MatchMethod::UnitName, bucket, None, None);
            }
        }

        // 2. Symbol against the symbol index, plausibility-filtered.
        let normalized_symbol = normalize_symbol(&record.symbol);
        if !normalized_symbol.is_empty() {
            let bucket = self.index.lookup_symbol(&normalized_symbol);
            let plausible: Vec<IndexEntry> = bucket
                .iter()
                .copied()
                .filter(|entry| {
                    symbol_match_is_plausible(&record.unit, self.index.entity(entry.entity))
                })
                .collect();
            if !plausible.is_empty() {
                return self.resolve(record, MatchMethod::Symbol, &plausible, None, None);
            }
        }

        // 3. Plural against the name index.
        let normalized_plural = normalize_name(&record.plural);
        if !normalized_plural.is_empty() {
            let bucket = self.index.lookup_name(&normalized_plural);
            if !bucket.is_empty() {
                return self.resolve(record, MatchMethod::Plural, bucket, None, None);
            }
        }

        // 4. Alternate names, in list order; the first with any hit wins.
        for alternate in &record.alternate_units {
            let normalized = normalize_name(alternate);
            if normalized.is_empty() {
                continue;
            }
            let bucket = self.index.lookup_name(&normalized);
            if !bucket.is_empty() {
                return self.resolve(
                    record,
                    MatchMethod::AlternateUnit,
                    bucket,
                    None,
                    Some(alternate),
                );
            }
        }

        // 5. Canonical unit, only when it differs from the unit name.
        let normalized_canonical = normalize_name(&record.canonical_unit);
        if !normalized_canonical.is_empty() && normalized_canonical != normalized_unit {
            let bucket = self.index.lookup_name(&normalized_canonical);
            if !bucket.is_empty() {
                return self.resolve(record, MatchMethod::CanonicalUnit, bucket, None, None);
            }
        }

        // 6. Spelling variants of the unit name.
        if !normalized_unit.is_empty() {
            for variant in spelling_variants(&normalized_unit) {
                let bucket = self.index.lookup_name(&variant);
                if !bucket.is_empty() {
                    return self.resolve(
                        record,
                        MatchMethod::SpellingVariant,
                        bucket,
                        Some(&variant),
                        None,
                    );
                }
            }
        }

        // 7. "X per Y" decomposition with variant recombination.
        if let Some((numerator, denominator)) = split_per(&normalized_unit) {
            let mut numerators = vec![numerator.to_string()];
            numerators.extend(spelling_variants(numerator));
            let mut denominators = vec![denominator.to_string()];
            denominators.extend(spelling_variants(denominator));

            for numerator in &numerators {
                for denominator in &denominators {
                    let recombined = format!("{numerator} per {denominator}");
                    if recombined == normalized_unit {
                        // Strategy 1 already probed the unmodified name.
                        continue;
                    }
                    let bucket = self.index.lookup_name(&recombined);
                    if !bucket.is_empty() {
                        return self.resolve(
                            record,
                            MatchMethod::PerDecomposition,
                            bucket,
                            Some(&recombined),
                            None,
                        );
                    }
                }
            }
        }

        // 8. "square"/"cubic" prefix with variants of the base.
        if let Some((prefix, base)) = split_shape(&normalized_unit) {
            for variant in spelling_variants(base) {
                let reattached = format!("{prefix}{variant}");
                let bucket = self.index.lookup_name(&reattached);
                if !bucket.is_empty() {
                    return self.resolve(
                        record,
                        MatchMethod::ShapeDecomposition,
                        bucket,
                        Some(&reattached),
                        None,
                    );
                }
            }
        }

        // 9. Spelling variants of each alternate name, in list order.
        for alternate in &record.alternate_units {
            let normalized = normalize_name(alternate);
            if normalized.is_empty() {
                continue;
            }
            for variant in spelling_variants(&normalized) {
                let bucket = self.index.lookup_name(&variant);
                if !bucket.is_empty() {
                    return self.resolve(
                        record,
                        MatchMethod::AlternateSpellingVariant,
                        bucket,
                        Some(&variant),
                        Some(alternate),
                    );
                }
            }
        }

        MatchResult::unmatched(&record.unit, &record.symbol, &record.property, &record.system)
    }

    /// Builds the result for a winning strategy: candidates in bucket order,
    /// chosen entity per the tie-break (label provenance first, then the
    /// index's sort-by-uri order), ambiguity flagged when a second distinct
    /// entity shares the winning rank.
    fn resolve(
        &self,
        record: &DatasetRecord,
        method: MatchMethod,
        bucket: &[IndexEntry],
        variant: Option<&str>,
        alternate: Option<&str>,
    ) -> MatchResult {
        let chosen = bucket
            .iter()
            .find(|entry| entry.provenance.is_label())
            .unwrap_or(&bucket[0]);

        let winning_rank = chosen.provenance.is_label();
        let ambiguous = bucket.iter().any(|entry| {
            entry.entity != chosen.entity && entry.provenance.is_label() == winning_rank
        });

        let candidates = bucket
            .iter()
            .map(|entry| {
                let entity = self.index.entity(entry.entity);
                MatchCandidate {
                    uri: entity.uri.clone(),
                    local_id: entity.local_id.clone(),
                    label: entity.label.clone(),
                    provenance: entry.provenance,
                    variant: variant.map(String::from),
                    alternate: alternate.map(String::from),
                }
            })
            .collect();

        let entity = self.index.entity(chosen.entity);
        MatchResult {
            unit: record.unit.clone(),
            symbol: record.symbol.clone(),
            property: record.property.clone(),
            system: record.system.clone(),
            matched: true,
            method: Some(method),
            entity: Some(MatchedEntity {
                uri: entity.uri.clone(),
                local_id: entity.local_id.clone(),
                label: entity.label.clone(),
            }),
            candidates,
            ambiguous,
        }
    }
}

#[cfg(test)]
mod tests {
    use ontomap_model::{OntologyEntity, Provenance};

    use super::*;

    fn entity(uri: &str, label: &str) -> OntologyEntity {
        let mut entity = OntologyEntity::new(uri, uri.rsplit(':').next().unwrap());
        entity.label = Some(label.to_string());
        entity
    }

    fn record(unit: &str) -> DatasetRecord {
        DatasetRecord {
            unit: unit.to_string(),
            ..DatasetRecord::default()
        }
    }

    #[test]
    fn empty_record_matches_nothing() {
        let index = LookupIndex::build(vec![entity("u:m", "metre")]);
        let engine = MatchEngine::new(&index);
        let result = engine.match_record(&DatasetRecord::default());
        assert!(!result.matched);
        assert!(result.method.is_none());
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn label_provenance_outranks_synonyms() {
        let labelled = entity("u:z-label", "hertz");
        let mut via_synonym = entity("u:a-synonym", "cycle per second");
        via_synonym.exact_synonyms.insert("hertz".to_string());

        let index = LookupIndex::build(vec![labelled, via_synonym]);
        let engine = MatchEngine::new(&index);
        let result = engine.match_record(&record("hertz"));

        assert_eq!(result.method, Some(MatchMethod::UnitName));
        // u:a-synonym sorts first, but the label hit on u:z-label wins.
        assert_eq!(result.entity.as_ref().unwrap().uri, "u:z-label");
        assert!(!result.ambiguous);
        assert_eq!(result.candidates.len(), 2);
        assert_eq!(result.candidates[0].provenance, Provenance::ExactSynonym);
    }

    #[test]
    fn uri_order_breaks_provenance_ties_and_is_flagged() {
        let mut first = entity("u:a", "degree");
        first.definition = Some("An angle unit.".to_string());
        let second = entity("u:b", "degree");

        let index = LookupIndex::build(vec![second, first]);
        let engine = MatchEngine::new(&index);
        let result = engine.match_record(&record("degree"));

        assert_eq!(result.entity.as_ref().unwrap().uri, "u:a");
        assert!(result.ambiguous);
    }

    #[test]
    fn canonical_unit_is_skipped_when_equal_to_unit() {
        let index = LookupIndex::build(vec![entity("u:m", "metre")]);
        let engine = MatchEngine::new(&index);
        let mut rec = record("unknown unit");
        rec.canonical_unit = "Unknown  Unit".to_string();
        let result = engine.match_record(&rec);
        assert!(!result.matched);
    }

    #[test]
    fn first_alternate_with_a_hit_wins() {
        let index = LookupIndex::build(vec![
            entity("u:in", "inch"),
            entity("u:th", "thou"),
        ]);
        let engine = MatchEngine::new(&index);
        let mut rec = record("mil");
        rec.alternate_units = vec!["thou".to_string(), "inch".to_string()];
        let result = engine.match_record(&rec);

        assert_eq!(result.method, Some(MatchMethod::AlternateUnit));
        assert_eq!(result.entity.as_ref().unwrap().uri, "u:th");
        assert_eq!(result.candidates[0].alternate.as_deref(), Some("thou"));
    }

    #[test]
    fn per_decomposition_skips_the_identity_recombination() {
        // Index holds neither "watt per steradian" nor any variant of it.
        let index = LookupIndex::build(vec![entity("u:x", "watt per sterad")]);
        let engine = MatchEngine::new(&index);
        let result = engine.match_record(&record("watt per steradian"));
        assert!(!result.matched);
    }
}
