//! Analyzers: read one persisted file and compute one aggregate
//!
//! All variants share the same shape, a path in and an explicit
//! `Result` out:
//! - [`word_count`]: case-insensitive substring count in a text file
//! - [`spreadsheet`]: the same count over one column of a workbook
//! - [`stats`]: min/max/mean/stdev of a numeric column in a delimited file
//! - [`grouping`]: counts per label over a list of JSON records

pub mod grouping;
pub mod spreadsheet;
pub mod stats;
pub mod word_count;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AggregateResult;
use crate::error::{Result, validation_failed};

fn default_delimiter() -> char {
    ','
}

/// Which aggregate to compute, with its parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalysisSpec {
    /// Count occurrences of `word` in a text file
    WordCount { word: String },

    /// Count occurrences of `word` in one column (a letter such as `A`) of
    /// the first worksheet of a workbook
    ColumnWordCount { column: String, word: String },

    /// Summarize the numeric `column` of a delimited file
    ColumnStats {
        column: String,
        #[serde(default = "default_delimiter")]
        delimiter: char,
    },

    /// Count records of `list` per value of `field`
    GroupCount { list: String, field: String },

    /// Sum the lengths of each record's `nested` list per value of `label`
    NestedCount {
        list: String,
        label: String,
        nested: String,
    },
}

impl AnalysisSpec {
    /// Short description for listings
    pub fn describe(&self) -> String {
        match self {
            AnalysisSpec::WordCount { word } => format!("count of '{word}'"),
            AnalysisSpec::ColumnWordCount { column, word } => {
                format!("count of '{word}' in column {column}")
            }
            AnalysisSpec::ColumnStats { column, .. } => format!("statistics of '{column}'"),
            AnalysisSpec::GroupCount { list, field } => format!("{list} grouped by '{field}'"),
            AnalysisSpec::NestedCount {
                list,
                label,
                nested,
            } => format!("size of '{nested}' per {list} '{label}'"),
        }
    }

    /// Check parameters before any file is read
    pub fn validate(&self) -> Result<()> {
        let empty = match self {
            AnalysisSpec::WordCount { word } => word.is_empty().then_some("word"),
            AnalysisSpec::ColumnWordCount { column, word } => {
                if word.is_empty() {
                    Some("word")
                } else if column.trim().is_empty() {
                    Some("column")
                } else {
                    spreadsheet::column_index(column)?;
                    None
                }
            }
            AnalysisSpec::ColumnStats { column, delimiter } => {
                if column.trim().is_empty() {
                    Some("column")
                } else if !delimiter.is_ascii() {
                    return Err(validation_failed(format!(
                        "Delimiter must be a single ASCII character, got {delimiter:?}"
                    )));
                } else {
                    None
                }
            }
            AnalysisSpec::GroupCount { list, field } => {
                if list.is_empty() {
                    Some("list")
                } else {
                    field.is_empty().then_some("field")
                }
            }
            AnalysisSpec::NestedCount {
                list,
                label,
                nested,
            } => [("list", list), ("label", label), ("nested", nested)]
                .into_iter()
                .find(|(_, v)| v.is_empty())
                .map(|(name, _)| name),
        };

        match empty {
            Some(name) => Err(validation_failed(format!(
                "Analysis parameter '{name}' cannot be empty"
            ))),
            None => Ok(()),
        }
    }
}

/// Run the analysis described by `spec` against the file at `path`
pub fn analyze(path: &Path, spec: &AnalysisSpec) -> Result<AggregateResult> {
    spec.validate()?;

    match spec {
        AnalysisSpec::WordCount { word } => {
            word_count::count_word(path, word).map(AggregateResult::WordCount)
        }
        AnalysisSpec::ColumnWordCount { column, word } => {
            spreadsheet::count_in_column(path, column, word)
                .map(AggregateResult::ColumnWordCount)
        }
        AnalysisSpec::ColumnStats { column, delimiter } => {
            // validate() guarantees an ASCII delimiter
            #[allow(clippy::cast_possible_truncation)]
            let delimiter = *delimiter as u8;
            stats::column_stats(path, column, delimiter)
                .inspect(|stats| {
                    if stats.skipped > 0 {
                        tracing::warn!(
                            "Skipped {} invalid rows in {}",
                            stats.skipped,
                            path.display()
                        );
                    }
                })
                .map(AggregateResult::Stats)
        }
        AnalysisSpec::GroupCount { list, field } => {
            grouping::group_count(path, list, field).map(AggregateResult::Counts)
        }
        AnalysisSpec::NestedCount {
            list,
            label,
            nested,
        } => grouping::nested_count(path, list, label, nested).map(AggregateResult::Counts),
    }
}
