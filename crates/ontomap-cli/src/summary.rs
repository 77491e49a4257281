use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ontomap_report::{CoverageCounts, MatchStatistics};

pub fn print_match_summary(stats: &MatchStatistics) {
    println!(
        "Matched {} of {} records ({:.2}%), {} unmatched, {} decided by tie-break only",
        stats.matched,
        stats.total,
        stats.match_rate_percent(),
        stats.unmatched(),
        stats.ambiguous,
    );

    let mut methods = Table::new();
    methods.set_header(vec![header_cell("Method"), header_cell("Count")]);
    apply_table_style(&mut methods);
    align_column(&mut methods, 1, CellAlignment::Right);
    for (method, count) in counts_by_frequency(&stats.method_counts) {
        methods.add_row(vec![Cell::new(method), Cell::new(count)]);
    }
    println!("{methods}");

    let mut systems = Table::new();
    systems.set_header(vec![
        header_cell("System"),
        header_cell("Matched"),
        header_cell("Unmatched"),
    ]);
    apply_table_style(&mut systems);
    align_column(&mut systems, 1, CellAlignment::Right);
    align_column(&mut systems, 2, CellAlignment::Right);
    for system in system_names(stats) {
        let matched = stats.matched_by_system.get(&system).copied().unwrap_or(0);
        let unmatched = stats.unmatched_by_system.get(&system).copied().unwrap_or(0);
        systems.add_row(vec![
            Cell::new(&system),
            Cell::new(matched),
            count_cell(unmatched, Color::Yellow),
        ]);
    }
    println!("{systems}");
}

pub fn print_coverage(counts: &CoverageCounts) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Coverage"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("total", counts.total),
        ("with primary id", counts.with_primary),
        ("with secondary id", counts.with_secondary),
        ("with ucum code", counts.with_ucum),
        ("with both ids", counts.with_both),
        ("with any id", counts.with_any),
        ("with no id", counts.with_none),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), percent_cell(count, counts.total)]);
    }
    println!("{table}");
}

fn counts_by_frequency(
    counts: &std::collections::BTreeMap<String, usize>,
) -> Vec<(&str, usize)> {
    let mut ordered: Vec<(&str, usize)> = counts
        .iter()
        .map(|(method, count)| (method.as_str(), *count))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ordered
}

fn system_names(stats: &MatchStatistics) -> Vec<String> {
    let mut names: Vec<String> = stats.matched_by_system.keys().cloned().collect();
    for name in stats.unmatched_by_system.keys() {
        if !stats.matched_by_system.contains_key(name) {
            names.push(name.clone());
        }
    }
    names.sort();
    names
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn percent_cell(count: usize, total: usize) -> Cell {
    if total == 0 {
        return Cell::new(count);
    }
    Cell::new(format!(
        "{count} ({:.1}%)",
        100.0 * count as f64 / total as f64
    ))
}
