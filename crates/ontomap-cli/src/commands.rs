use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::{debug, info, info_span, warn};

use ontomap_extract::OntologyExtractor;
use ontomap_match::{LookupIndex, match_all};
use ontomap_report::{CoverageCounts, MatchReport, combine_matches};

use crate::cli::{CombineArgs, ExtractArgs, MatchArgs};
use crate::summary::{print_coverage, print_match_summary};

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let span = info_span!("extract", elements = %args.elements.display());
    let _guard = span.enter();

    let elements =
        ontomap_ingest::load_raw_elements(&args.elements).context("load raw elements")?;
    info!(count = elements.len(), "loaded raw elements");

    let start = Instant::now();
    let entities = OntologyExtractor::uo().extract(&elements);
    let deprecated = entities.iter().filter(|entity| entity.deprecated).count();
    info!(
        entities = entities.len(),
        deprecated,
        merged_or_dropped = elements.len().saturating_sub(entities.len()),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "extracted entity set"
    );
    if entities.is_empty() {
        warn!("no elements matched the ontology identifier shape");
    }

    ontomap_ingest::write_entities(&args.out, &entities).context("write entity set")?;
    info!(out = %args.out.display(), "wrote entity set");
    Ok(())
}

pub fn run_match(args: &MatchArgs) -> Result<()> {
    let span = info_span!("match", dataset = %args.dataset.display());
    let _guard = span.enter();

    let entities = ontomap_ingest::load_entities(&args.entities).context("load entity set")?;
    let dataset = ontomap_ingest::load_dataset(&args.dataset).context("load dataset")?;
    info!(
        entities = entities.len(),
        records = dataset.len(),
        "loaded inputs"
    );

    let build_start = Instant::now();
    let index = LookupIndex::build(entities);
    debug!(
        name_keys = index.name_key_count(),
        symbol_keys = index.symbol_key_count(),
        elapsed_ms = build_start.elapsed().as_millis() as u64,
        "built lookup indices"
    );

    let bar = ProgressBar::new_spinner();
    bar.set_message(format!("matching {} records", dataset.len()));
    bar.enable_steady_tick(Duration::from_millis(100));
    let match_start = Instant::now();
    let results = match_all(&index, &dataset);
    bar.finish_and_clear();

    let report = MatchReport::new(results);
    info!(
        matched = report.statistics.matched,
        unmatched = report.statistics.unmatched(),
        elapsed_ms = match_start.elapsed().as_millis() as u64,
        "matched dataset"
    );

    ontomap_ingest::write_match_report(&args.out, &report).context("write match report")?;
    info!(out = %args.out.display(), "wrote match report");

    print_match_summary(&report.statistics);
    Ok(())
}

pub fn run_combine(args: &CombineArgs) -> Result<()> {
    let span = info_span!("combine", dataset = %args.dataset.display());
    let _guard = span.enter();

    let dataset = ontomap_ingest::load_dataset(&args.dataset).context("load dataset")?;
    let report = ontomap_ingest::load_match_report(&args.matches).context("load match report")?;

    let secondary = match &args.secondary {
        Some(path) => {
            ontomap_ingest::load_secondary_matches(path).context("load secondary matches")?
        }
        None => Vec::new(),
    };
    let ucum_codes = match &args.ucum {
        Some(path) => ontomap_ingest::load_ucum_map(path).context("load ucum map")?,
        None => BTreeMap::new(),
    };
    if args.ucum.is_some() && args.secondary.is_none() {
        warn!("a ucum map was supplied without secondary matches; no codes can resolve");
    }
    info!(
        records = dataset.len(),
        results = report.results.len(),
        secondary = secondary.len(),
        ucum_codes = ucum_codes.len(),
        "loaded inputs"
    );

    let enriched = combine_matches(&dataset, &report.results, &secondary, &ucum_codes)
        .context("combine matches with dataset")?;
    ontomap_ingest::write_enriched(&args.out, &enriched).context("write enriched dataset")?;
    info!(out = %args.out.display(), "wrote enriched dataset");

    print_coverage(&CoverageCounts::from_records(&enriched));
    Ok(())
}
