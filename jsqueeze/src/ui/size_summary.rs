// jsqueeze/src/ui/size_summary.rs
//! Tables for `--stats` and `cache list`.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use jsqueeze_core::{CacheEntryMeta, MinifyOutcome};
use std::io::{self, Write};

/// How the cache took part in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheUsage {
    Hit,
    Miss,
    Disabled,
}

impl CacheUsage {
    pub fn of(outcome: &MinifyOutcome) -> Self {
        match (outcome.cached_path.is_some(), outcome.cache_hit) {
            (false, _) => CacheUsage::Disabled,
            (true, true) => CacheUsage::Hit,
            (true, false) => CacheUsage::Miss,
        }
    }

    fn label(self) -> &'static str {
        match self {
            CacheUsage::Hit => "hit",
            CacheUsage::Miss => "miss",
            CacheUsage::Disabled => "disabled",
        }
    }
}

/// Percentage of `original` removed, one decimal. Empty input saves nothing.
pub fn saved_percent(original: usize, minified: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let saved = original.saturating_sub(minified) as f64;
    (saved * 1000.0 / original as f64).round() / 10.0
}

fn new_table(header: Vec<&str>, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    if !supports_color {
        table.force_no_tty();
    }
    table
}

pub fn print_size_summary<W: Write>(
    writer: &mut W,
    outcome: &MinifyOutcome,
    engine_name: &str,
    supports_color: bool,
) -> io::Result<()> {
    let usage = CacheUsage::of(outcome);
    let mut table = new_table(vec!["Metric", "Value"], supports_color);

    let usage_cell = match usage {
        CacheUsage::Hit => Cell::new(usage.label()).fg(Color::Green),
        CacheUsage::Miss => Cell::new(usage.label()).fg(Color::Yellow),
        CacheUsage::Disabled => Cell::new(usage.label()),
    };

    table.add_row(vec![Cell::new("Engine"), Cell::new(engine_name)]);
    table.add_row(vec![
        Cell::new("Original bytes"),
        Cell::new(outcome.original_len).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Minified bytes"),
        Cell::new(outcome.minified_len).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Saved"),
        Cell::new(format!("{:.1}%", saved_percent(outcome.original_len, outcome.minified_len)))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Cache key"), Cell::new(outcome.key.as_str())]);
    table.add_row(vec![Cell::new("Cache"), usage_cell]);

    writeln!(writer, "{table}")
}

pub fn print_cache_listing<W: Write>(
    writer: &mut W,
    entries: &[CacheEntryMeta],
    supports_color: bool,
) -> io::Result<()> {
    let mut table = new_table(vec!["Key", "Source bytes", "Minified bytes", "Created"], supports_color);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.key.as_str()),
            Cell::new(entry.source_len).set_alignment(CellAlignment::Right),
            Cell::new(entry.minified_len).set_alignment(CellAlignment::Right),
            Cell::new(&entry.created_at),
        ]);
    }
    writeln!(writer, "{table}")
}
