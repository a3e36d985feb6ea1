//! Summary statistics over one numeric column of a delimited file

use std::path::Path;

use crate::domain::{ColumnStats, StatsSummary};
use crate::error::{Result, analysis, fs};

/// Min, max, mean and sample standard deviation of `values`.
///
/// Returns `None` for an empty slice. With a single value the standard
/// deviation is 0.
pub fn summarize(values: &[f64]) -> Option<StatsSummary> {
    let (&first, rest) = values.split_first()?;

    let (min, max, sum) = rest
        .iter()
        .fold((first, first, first), |(min, max, sum), &v| {
            (min.min(v), max.max(v), sum + v)
        });

    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = sum / n;

    let stdev = if values.len() < 2 {
        0.0
    } else {
        let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (squares / (n - 1.0)).sqrt()
    };

    Some(StatsSummary {
        min,
        max,
        mean,
        stdev,
        count: values.len(),
    })
}

/// Read a delimited file with a header row and summarize `column`.
///
/// Rows whose cell is missing or not a finite number are skipped with a
/// warning. A missing column, an unreadable file or zero valid values fail
/// the whole analysis.
pub fn column_stats(path: &Path, column: &str, delimiter: u8) -> Result<ColumnStats> {
    let shown = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| fs::read_failed(&shown, e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| analysis::parse_failed(&shown, e.to_string()))?;

    let index = headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == column.trim())
        .ok_or_else(|| analysis::column_not_found(column, &shown))?;

    let mut values = Vec::new();
    let mut skipped = 0;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping malformed row: {e}");
                skipped += 1;
                continue;
            }
        };
        let line = line_of(&record);

        match record.get(index).map(|cell| (cell, cell.trim().parse::<f64>())) {
            Some((_, Ok(value))) if value.is_finite() => values.push(value),
            Some((cell, _)) => {
                tracing::warn!("Skipping row at line {line}: {column}={cell:?} is not a number");
                skipped += 1;
            }
            None => {
                tracing::warn!("Skipping row at line {line}: no value for {column}");
                skipped += 1;
            }
        }
    }

    let summary = summarize(&values).ok_or_else(|| analysis::no_valid_data(column, &shown))?;
    tracing::debug!("{column}: {} values used, {skipped} rows skipped", summary.count);

    Ok(ColumnStats {
        column: column.to_string(),
        summary,
        skipped,
    })
}

/// Line a record starts on; quoted fields may span several lines
fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}
