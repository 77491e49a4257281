use std::collections::BTreeMap;

use ontomap_model::{
    DatasetRecord, EnrichedRecord, MapperError, MatchResult, SecondaryMatch,
};
use serde::{Deserialize, Serialize};

/// Attaches ontology identifiers to each dataset record.
///
/// Primary identifiers come from `results`, which must be positionally
/// aligned with `records` (matching preserves dataset order). Secondary
/// matches are keyed by `(unit, symbol)`; UCUM codes are resolved from the
/// secondary uri through `ucum_codes`.
pub fn combine_matches(
    records: &[DatasetRecord],
    results: &[MatchResult],
    secondary: &[SecondaryMatch],
    ucum_codes: &BTreeMap<String, String>,
) -> Result<Vec<EnrichedRecord>, MapperError> {
    if records.len() != results.len() {
        return Err(MapperError::ResultMismatch {
            records: records.len(),
            results: results.len(),
        });
    }

    let mut secondary_by_key: BTreeMap<(&str, &str), &str> = BTreeMap::new();
    for entry in secondary {
        // First match per key wins, as in the source reports.
        secondary_by_key
            .entry((entry.unit.as_str(), entry.symbol.as_str()))
            .or_insert(entry.uri.as_str());
    }

    let enriched = records
        .iter()
        .zip(results)
        .map(|(record, result)| {
            let secondary_uri = secondary_by_key
                .get(&(record.unit.as_str(), record.symbol.as_str()))
                .map(|uri| (*uri).to_string());
            let ucum_code = secondary_uri
                .as_deref()
                .and_then(|uri| ucum_codes.get(uri))
                .cloned();
            EnrichedRecord {
                record: record.clone(),
                ontology_uri: result.entity.as_ref().map(|e| e.uri.clone()),
                ontology_id: result.entity.as_ref().map(|e| e.local_id.clone()),
                secondary_uri,
                ucum_code,
            }
        })
        .collect();
    Ok(enriched)
}

/// Identifier coverage over an enriched dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageCounts {
    pub total: usize,
    pub with_primary: usize,
    pub with_secondary: usize,
    pub with_ucum: usize,
    pub with_both: usize,
    pub with_any: usize,
    pub with_none: usize,
}

impl CoverageCounts {
    pub fn from_records(records: &[EnrichedRecord]) -> Self {
        let mut counts = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            let primary = record.ontology_uri.is_some();
            let secondary = record.secondary_uri.is_some();
            if primary {
                counts.with_primary += 1;
            }
            if secondary {
                counts.with_secondary += 1;
            }
            if record.ucum_code.is_some() {
                counts.with_ucum += 1;
            }
            if primary && secondary {
                counts.with_both += 1;
            }
            if primary || secondary {
                counts.with_any += 1;
            } else {
                counts.with_none += 1;
            }
        }
        counts
    }
}
