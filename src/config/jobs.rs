//! Fetch and analysis job definitions
//!
//! A fetch job names one remote resource and the file it is persisted to.
//! An analysis job names one persisted file, the aggregate to compute from
//! it and the report file to write.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisSpec;
use crate::domain::{ContentKind, ResourceRef};

/// One fetch-and-write pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchJob {
    /// Job name, unique among fetch jobs
    pub name: String,

    /// URL to GET
    pub url: String,

    /// Declared content kind; decides how the content is persisted
    pub kind: ContentKind,

    /// File name under the fetched-data directory
    pub file: String,
}

impl FetchJob {
    pub fn resource(&self) -> ResourceRef {
        ResourceRef::new(self.url.clone(), self.kind)
    }
}

/// One analyze-and-report pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisJob {
    /// Job name, unique among analysis jobs
    pub name: String,

    /// File name under the fetched-data directory
    pub input: String,

    /// Report file name under the processed-output directory
    pub output: String,

    /// Heading line of the report, replacing the default one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub analysis: AnalysisSpec,
}

pub(super) fn default_fetch_jobs() -> Vec<FetchJob> {
    vec![
        FetchJob {
            name: "romeo".to_string(),
            url: "https://raw.githubusercontent.com/denisecase/datafun-03-analytics/main/hosted/romeo.txt"
                .to_string(),
            kind: ContentKind::Text,
            file: "romeo.txt".to_string(),
        },
        FetchJob {
            name: "happiness".to_string(),
            url: "https://raw.githubusercontent.com/MainakRepositor/Datasets/master/World%20Happiness%20Data/2020.csv"
                .to_string(),
            kind: ContentKind::Tabular,
            file: "2020_happiness.csv".to_string(),
        },
        FetchJob {
            name: "astronauts".to_string(),
            url: "http://api.open-notify.org/astros.json".to_string(),
            kind: ContentKind::Structured,
            file: "astros.json".to_string(),
        },
    ]
}

pub(super) fn default_analysis_jobs() -> Vec<AnalysisJob> {
    vec![
        AnalysisJob {
            name: "romeo-count".to_string(),
            input: "romeo.txt".to_string(),
            output: "text_romeo_word_count.txt".to_string(),
            title: None,
            analysis: AnalysisSpec::WordCount {
                word: "Romeo".to_string(),
            },
        },
        AnalysisJob {
            name: "happiness-stats".to_string(),
            input: "2020_happiness.csv".to_string(),
            output: "csv_ladder_score_stats.txt".to_string(),
            title: Some("Ladder Score Statistics:".to_string()),
            analysis: AnalysisSpec::ColumnStats {
                column: "Ladder score".to_string(),
                delimiter: ',',
            },
        },
        AnalysisJob {
            name: "astronauts-by-craft".to_string(),
            input: "astros.json".to_string(),
            output: "json_astronauts_by_craft.txt".to_string(),
            title: Some("Astronauts by spacecraft:".to_string()),
            analysis: AnalysisSpec::GroupCount {
                list: "people".to_string(),
                field: "craft".to_string(),
            },
        },
    ]
}
