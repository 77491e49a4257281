//! Match outcome types: provenance tags, method tags, candidates, results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which ontology field produced a lookup hit.
///
/// Ordering matters: `Label` sorts before every synonym kind, which is the
/// tie-break rank used when a strategy finds several candidates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Label,
    ExactSynonym,
    RelatedSynonym,
    NarrowSynonym,
}

impl Provenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::ExactSynonym => "exact_synonym",
            Self::RelatedSynonym => "related_synonym",
            Self::NarrowSynonym => "narrow_synonym",
        }
    }

    pub fn is_label(self) -> bool {
        matches!(self, Self::Label)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which strategy produced the winning match.
///
/// Variants are listed in engine priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    UnitName,
    Symbol,
    Plural,
    AlternateUnit,
    CanonicalUnit,
    SpellingVariant,
    PerDecomposition,
    ShapeDecomposition,
    AlternateSpellingVariant,
}

impl MatchMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnitName => "unit_name",
            Self::Symbol => "symbol",
            Self::Plural => "plural",
            Self::AlternateUnit => "alternate_unit",
            Self::CanonicalUnit => "canonical_unit",
            Self::SpellingVariant => "spelling_variant",
            Self::PerDecomposition => "per_decomposition",
            Self::ShapeDecomposition => "shape_decomposition",
            Self::AlternateSpellingVariant => "alternate_spelling_variant",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entity discovered by the winning strategy, kept for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub uri: String,
    pub local_id: String,
    pub label: Option<String>,
    pub provenance: Provenance,
    /// The rewritten lookup key, when a variant strategy produced the hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// The alternate-unit entry that produced the hit, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<String>,
}

/// The entity a record resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedEntity {
    pub uri: String,
    pub local_id: String,
    pub label: Option<String>,
}

/// Outcome of matching one dataset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Record identity, echoed for downstream keying and reporting.
    pub unit: String,
    pub symbol: String,
    pub property: String,
    pub system: String,

    pub matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<MatchMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<MatchedEntity>,

    /// Every entity the winning strategy found, in tie-break order.
    #[serde(default)]
    pub candidates: Vec<MatchCandidate>,

    /// True when a second distinct entity shared the winning provenance
    /// rank, i.e. the chosen entity won only by the deterministic
    /// sort-by-uri tie-break.
    #[serde(default)]
    pub ambiguous: bool,
}

impl MatchResult {
    /// An unmatched result echoing the record's identity fields.
    pub fn unmatched(unit: &str, symbol: &str, property: &str, system: &str) -> Self {
        Self {
            unit: unit.to_string(),
            symbol: symbol.to_string(),
            property: property.to_string(),
            system: system.to_string(),
            matched: false,
            method: None,
            entity: None,
            candidates: Vec::new(),
            ambiguous: false,
        }
    }
}
