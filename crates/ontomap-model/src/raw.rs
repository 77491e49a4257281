//! Raw ontology element shape and identifier validation.
//!
//! The ontology file syntax (OWL/RDF tag walking) is a collaborator's
//! responsibility; this crate consumes elements already decoded into
//! [`RawOntologyElement`]. Identifier validation against the ontology's
//! canonical shape lives here so the extractor and its callers agree on what
//! counts as an in-namespace entity.

use serde::{Deserialize, Serialize};

/// A language-tagged label literal as it appears in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelLiteral {
    pub text: String,
    /// BCP 47 tag (`en`, `en-GB`, ...) or absent for untagged literals.
    #[serde(default)]
    pub lang: Option<String>,
}

impl LabelLiteral {
    pub fn untagged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: None,
        }
    }

    pub fn tagged(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: Some(lang.into()),
        }
    }
}

/// One source element that may declare an ontology entity.
///
/// Field lists may contain duplicates and blank strings; the extractor
/// cleans them up. Elements whose `uri` does not match the ontology's
/// [`EntityIdPattern`] are dropped silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOntologyElement {
    pub uri: String,
    #[serde(default)]
    pub labels: Vec<LabelLiteral>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub exact_synonyms: Vec<String>,
    #[serde(default)]
    pub related_synonyms: Vec<String>,
    #[serde(default)]
    pub narrow_synonyms: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub parent_refs: Vec<String>,
}

/// Canonical identifier shape of one ontology: `<base_uri><id_prefix><digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityIdPattern {
    base_uri: String,
    id_prefix: String,
}

impl EntityIdPattern {
    pub fn new(base_uri: impl Into<String>, id_prefix: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            id_prefix: id_prefix.into(),
        }
    }

    /// The Units Ontology identifier shape.
    pub fn uo() -> Self {
        Self::new("http://purl.obolibrary.org/obo/", "UO_")
    }

    /// True when `uri` is exactly base + prefix + a non-empty digit run.
    pub fn matches(&self, uri: &str) -> bool {
        self.digits(uri)
            .is_some_and(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
    }

    /// Extracts the local identifier (`UO_0000122`) from a matching uri.
    pub fn local_id<'a>(&self, uri: &'a str) -> Option<&'a str> {
        if !self.matches(uri) {
            return None;
        }
        uri.strip_prefix(self.base_uri.as_str())
    }

    fn digits<'a>(&self, uri: &'a str) -> Option<&'a str> {
        uri.strip_prefix(self.base_uri.as_str())?
            .strip_prefix(self.id_prefix.as_str())
    }
}
