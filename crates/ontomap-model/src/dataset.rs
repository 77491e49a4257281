//! Dataset record shape (external, read-only input).

use serde::{Deserialize, Serialize};

/// One unit-of-measurement catalog record.
///
/// Every field is human-authored free text; any of them may be blank. A
/// blank field simply gives the matching strategies that read it nothing to
/// work with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Primary unit name (e.g. "kilogram per cubic meter").
    #[serde(default)]
    pub unit: String,

    /// Name of the canonical unit this record reduces to.
    #[serde(default)]
    pub canonical_unit: String,

    /// Printed symbol (e.g. "kg/m³"). Case is significant.
    #[serde(default)]
    pub symbol: String,

    /// Plural form of the unit name.
    #[serde(default)]
    pub plural: String,

    /// Alternate spellings/names, in source order.
    #[serde(default, rename = "alternate_unit")]
    pub alternate_units: Vec<String>,

    /// Physical property measured (e.g. "density").
    #[serde(default)]
    pub property: String,

    /// Measurement system (e.g. "si", "imperial").
    #[serde(default)]
    pub system: String,
}
