//! Enriched dataset shapes produced by the combine step.

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetRecord;

/// A dataset record with ontology identifiers attached where resolved.
///
/// Serializes flat, so the enriched JSONL keeps the original record fields
/// with the identifier columns appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: DatasetRecord,

    /// Primary ontology match.
    pub ontology_uri: Option<String>,
    pub ontology_id: Option<String>,

    /// Match from a second vocabulary (e.g. OM), when supplied.
    pub secondary_uri: Option<String>,

    /// UCUM code resolved from the secondary uri, when a uri→code map was
    /// supplied.
    pub ucum_code: Option<String>,
}

/// A secondary-vocabulary match keyed the way the catalog identifies records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryMatch {
    pub unit: String,
    #[serde(default)]
    pub symbol: String,
    pub uri: String,
}
