//! Domain models for datafun
//!
//! This module contains the plain data that flows between pipeline stages:
//! resource references, fetched content and aggregate results.

pub mod aggregate;
pub mod resource;

pub use aggregate::{
    AggregateResult, ColumnStats, ColumnWordCount, GroupCounts, StatsSummary, WordCount,
};
pub use resource::{ContentKind, FetchedContent, ResourceRef};
