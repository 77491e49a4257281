use std::collections::BTreeMap;
use std::fmt;

use ontomap_model::MatchResult;
use serde::{Deserialize, Serialize};

/// Key used when a record carries no measurement system or property.
const UNKNOWN: &str = "unknown";

/// Aggregate view over a batch of match results.
///
/// `merge` is commutative and associative, and `observe` is `merge` with a
/// singleton, so any reduction order over the same multiset of results
/// produces the same statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub total: usize,
    pub matched: usize,
    /// Winning matches that were decided only by the uri tie-break.
    pub ambiguous: usize,
    /// Count per winning method tag.
    pub method_counts: BTreeMap<String, usize>,
    pub matched_by_system: BTreeMap<String, usize>,
    pub unmatched_by_system: BTreeMap<String, usize>,
    pub matched_by_property: BTreeMap<String, usize>,
    pub unmatched_by_property: BTreeMap<String, usize>,
}

impl MatchStatistics {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut stats = Self::default();
        for result in results {
            stats.observe(result);
        }
        stats
    }

    /// Folds one result into the aggregate.
    pub fn observe(&mut self, result: &MatchResult) {
        self.total += 1;
        let system = non_blank_or_unknown(&result.system);
        let property = non_blank_or_unknown(&result.property);
        if result.matched {
            self.matched += 1;
            if result.ambiguous {
                self.ambiguous += 1;
            }
            if let Some(method) = result.method {
                *self.method_counts.entry(method.to_string()).or_insert(0) += 1;
            }
            *self.matched_by_system.entry(system).or_insert(0) += 1;
            *self.matched_by_property.entry(property).or_insert(0) += 1;
        } else {
            *self.unmatched_by_system.entry(system).or_insert(0) += 1;
            *self.unmatched_by_property.entry(property).or_insert(0) += 1;
        }
    }

    /// Combines two aggregates built over disjoint result sets.
    pub fn merge(mut self, other: Self) -> Self {
        self.total += other.total;
        self.matched += other.matched;
        self.ambiguous += other.ambiguous;
        merge_counts(&mut self.method_counts, other.method_counts);
        merge_counts(&mut self.matched_by_system, other.matched_by_system);
        merge_counts(&mut self.unmatched_by_system, other.unmatched_by_system);
        merge_counts(&mut self.matched_by_property, other.matched_by_property);
        merge_counts(&mut self.unmatched_by_property, other.unmatched_by_property);
        self
    }

    pub fn unmatched(&self) -> usize {
        self.total - self.matched
    }

    pub fn match_rate_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.matched as f64 / self.total as f64
    }
}

fn merge_counts(into: &mut BTreeMap<String, usize>, from: BTreeMap<String, usize>) {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
}

fn non_blank_or_unknown(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}

impl fmt::Display for MatchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total records:   {}", self.total)?;
        writeln!(
            f,
            "matched:         {} ({:.2}%)",
            self.matched,
            self.match_rate_percent()
        )?;
        writeln!(f, "unmatched:       {}", self.unmatched())?;
        writeln!(f, "tie-break only:  {}", self.ambiguous)?;
        writeln!(f, "by method:")?;
        for (method, count) in &self.method_counts {
            writeln!(f, "  {method}: {count}")?;
        }
        Ok(())
    }
}

/// Full output of a matching run: aggregate plus per-record results in
/// dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub statistics: MatchStatistics,
    pub results: Vec<MatchResult>,
}

impl MatchReport {
    pub fn new(results: Vec<MatchResult>) -> Self {
        Self {
            statistics: MatchStatistics::from_results(&results),
            results,
        }
    }
}
