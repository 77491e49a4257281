//! Multi-strategy matching of dataset records against ontology entities.
//!
//! The pipeline is: build a frozen [`LookupIndex`] from extracted entities
//! once, then run the [`MatchEngine`] over each dataset record
//! independently. Matching is pure over the frozen index, so [`match_all`]
//! fans records out across a thread pool without coordination.

mod batch;
mod engine;
mod index;
pub mod normalize;
mod plausibility;
pub mod variants;

pub use batch::match_all;
pub use engine::MatchEngine;
pub use index::{IndexEntry, LookupIndex};
pub use plausibility::symbol_match_is_plausible;
