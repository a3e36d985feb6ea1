//! Plain-text rendering of aggregate results
//!
//! Reports have a fixed layout: a title line where the aggregate has one,
//! then one labeled line per field. Floating-point statistics use two
//! decimals.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::{AggregateResult, ColumnStats, ColumnWordCount, GroupCounts, WordCount};
use crate::error::Result;
use crate::writer;

/// Render `result` as report text, using `title` in place of the default
/// heading when given
pub fn render(result: &AggregateResult, title: Option<&str>) -> String {
    match result {
        AggregateResult::WordCount(count) => render_word_count(count),
        AggregateResult::ColumnWordCount(count) => render_column_word_count(count),
        AggregateResult::Stats(stats) => render_stats(stats, title),
        AggregateResult::Counts(counts) => render_counts(counts, title),
    }
}

/// Render `result` and write it to `path`, replacing any previous report
pub fn write_report(path: &Path, result: &AggregateResult, title: Option<&str>) -> Result<()> {
    writer::write_text(path, &render(result, title))
}

fn render_word_count(count: &WordCount) -> String {
    format!("Occurrences of '{}': {}\n", count.word, count.count)
}

fn render_column_word_count(count: &ColumnWordCount) -> String {
    format!(
        "Occurrences of '{}' in column {}: {}\n",
        count.word, count.column, count.count
    )
}

fn render_stats(stats: &ColumnStats, title: Option<&str>) -> String {
    let heading = title.map_or_else(|| format!("{} Statistics:", stats.column), str::to_string);
    let s = &stats.summary;
    format!(
        "{heading}\nMinimum: {:.2}\nMaximum: {:.2}\nMean: {:.2}\nStandard Deviation: {:.2}\n",
        s.min, s.max, s.mean, s.stdev
    )
}

fn render_counts(counts: &GroupCounts, title: Option<&str>) -> String {
    let mut out = title.map_or_else(|| format!("Counts by {}:", counts.grouped_by), str::to_string);
    out.push('\n');
    for (label, count) in &counts.counts {
        let _ = writeln!(out, "{label}: {count}");
    }
    out
}
