//! Readers and writers for the external shapes.
//!
//! Raw ontology elements, extracted entities, match reports, and the two
//! auxiliary maps travel as JSON documents; the dataset and its enriched
//! form travel as JSONL, one record per non-blank line. Parsing is split
//! from file access so tests can feed strings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ontomap_model::{
    DatasetRecord, EnrichedRecord, OntologyEntity, RawOntologyElement, SecondaryMatch,
};
use ontomap_report::MatchReport;

/// Loads Input A: raw ontology elements decoded by a collaborator.
pub fn load_raw_elements(path: &Path) -> Result<Vec<RawOntologyElement>> {
    read_json(path)
}

/// Loads a previously written extracted-entity set.
pub fn load_entities(path: &Path) -> Result<Vec<OntologyEntity>> {
    read_json(path)
}

pub fn write_entities(path: &Path, entities: &[OntologyEntity]) -> Result<()> {
    write_json(path, entities)
}

/// Loads Input B: the unit catalog, one JSON record per line.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRecord>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read dataset: {}", path.display()))?;
    parse_dataset(&text).with_context(|| format!("parse dataset: {}", path.display()))
}

/// Parses JSONL dataset content.
pub fn parse_dataset(text: &str) -> Result<Vec<DatasetRecord>> {
    let mut records = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: DatasetRecord = serde_json::from_str(line)
            .with_context(|| format!("record on line {}", number + 1))?;
        records.push(record);
    }
    Ok(records)
}

pub fn write_match_report(path: &Path, report: &MatchReport) -> Result<()> {
    write_json(path, report)
}

pub fn load_match_report(path: &Path) -> Result<MatchReport> {
    read_json(path)
}

/// Loads secondary-vocabulary matches (e.g. OM) produced out of band.
pub fn load_secondary_matches(path: &Path) -> Result<Vec<SecondaryMatch>> {
    read_json(path)
}

/// Loads a uri→UCUM-code map extracted from the OM UCUM mapping by a
/// collaborator.
pub fn load_ucum_map(path: &Path) -> Result<BTreeMap<String, String>> {
    read_json(path)
}

/// Writes the enriched dataset as JSONL, preserving record order.
pub fn write_enriched(path: &Path, records: &[EnrichedRecord]) -> Result<()> {
    let mut out = String::new();
    for record in records {
        let line = serde_json::to_string(record).context("serialize enriched record")?;
        out.push_str(&line);
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("write enriched dataset: {}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("read: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse: {}", path.display()))
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    fs::write(path, text).with_context(|| format!("write: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_lines_parse_and_blank_lines_are_skipped() {
        let text = concat!(
            r#"{"unit": "metre", "symbol": "m", "system": "si"}"#,
            "\n\n",
            r#"{"unit": "foot", "plural": "feet", "alternate_unit": ["international foot"]}"#,
            "\n",
        );
        let records = parse_dataset(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "m");
        assert_eq!(records[1].alternate_units, vec!["international foot"]);
    }

    #[test]
    fn malformed_dataset_lines_report_their_line_number() {
        let text = "{\"unit\": \"metre\"}\nnot json\n";
        let error = parse_dataset(text).unwrap_err();
        assert!(format!("{error:#}").contains("line 2"));
    }

    #[test]
    fn enriched_records_serialize_flat() {
        let record = EnrichedRecord {
            record: DatasetRecord {
                unit: "ampere".to_string(),
                symbol: "A".to_string(),
                ..DatasetRecord::default()
            },
            ontology_uri: Some("http://purl.obolibrary.org/obo/UO_0000011".to_string()),
            ontology_id: Some("UO_0000011".to_string()),
            secondary_uri: None,
            ucum_code: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        // Flattened: original fields and identifier columns side by side.
        assert!(json.contains("\"unit\":\"ampere\""));
        assert!(json.contains("\"ontology_id\":\"UO_0000011\""));
        let round: EnrichedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(round, record);
    }
}
