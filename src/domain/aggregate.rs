//! Aggregate results produced by the analyzers and consumed by the reporter

use indexmap::IndexMap;

/// Occurrences of one word in a text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrences of one word in a single spreadsheet column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWordCount {
    /// Column letter as configured, e.g. `A`
    pub column: String,
    pub word: String,
    pub count: usize,
}

/// Summary statistics over a set of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation, 0 with fewer than two values
    pub stdev: f64,
    pub count: usize,
}

/// Statistics of one numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column: String,
    pub summary: StatsSummary,
    /// Rows skipped because the cell was missing or not numeric
    pub skipped: usize,
}

/// Counts per label, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCounts {
    /// What the labels are (e.g. the grouped field name)
    pub grouped_by: String,
    pub counts: IndexMap<String, usize>,
}

impl GroupCounts {
    pub fn new(grouped_by: impl Into<String>) -> Self {
        Self {
            grouped_by: grouped_by.into(),
            counts: IndexMap::new(),
        }
    }

    /// Add `amount` to `label`, inserting it at the end if unseen
    pub fn add(&mut self, label: impl Into<String>, amount: usize) {
        *self.counts.entry(label.into()).or_insert(0) += amount;
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts.get(label).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Output of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateResult {
    WordCount(WordCount),
    ColumnWordCount(ColumnWordCount),
    Stats(ColumnStats),
    Counts(GroupCounts),
}
