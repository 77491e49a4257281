pub mod dataset;
pub mod entity;
pub mod enriched;
pub mod error;
pub mod matching;
pub mod raw;

pub use dataset::DatasetRecord;
pub use entity::OntologyEntity;
pub use enriched::{EnrichedRecord, SecondaryMatch};
pub use error::{MapperError, Result};
pub use matching::{MatchCandidate, MatchMethod, MatchResult, MatchedEntity, Provenance};
pub use raw::{EntityIdPattern, LabelLiteral, RawOntologyElement};
