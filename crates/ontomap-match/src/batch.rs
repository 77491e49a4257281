//! Order-preserving parallel batch driver.

use ontomap_model::{DatasetRecord, MatchResult};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::engine::MatchEngine;
use crate::index::LookupIndex;

/// Matches every record against the frozen index, in parallel.
///
/// Each match is pure over immutable inputs, so records fan out across the
/// thread pool with no coordination; results come back in input order and
/// are bit-identical to a sequential loop.
pub fn match_all(index: &LookupIndex, records: &[DatasetRecord]) -> Vec<MatchResult> {
    let engine = MatchEngine::new(index);
    records
        .par_iter()
        .map(|record| engine.match_record(record))
        .collect()
}
