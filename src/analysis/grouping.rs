//! Grouping and counting over a list of records in a JSON file

use std::path::Path;

use serde_json::Value;

use crate::domain::GroupCounts;
use crate::error::{Result, analysis, fs};

/// Label used for records that lack the grouping field
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Count records of `records` per value of `field`
pub fn group_records(records: &[Value], field: &str) -> GroupCounts {
    let mut counts = GroupCounts::new(field);
    for record in records {
        counts.add(label_of(record, field), 1);
    }
    counts
}

/// Sum the lengths of each record's `nested` list per value of `label_field`
pub fn sum_nested_lengths(records: &[Value], label_field: &str, nested: &str) -> GroupCounts {
    let mut counts = GroupCounts::new(label_field);
    for record in records {
        let label = label_of(record, label_field);
        let length = match record.get(nested) {
            Some(Value::Array(items)) => items.len(),
            None | Some(Value::Null) => 0,
            Some(other) => {
                tracing::warn!("'{nested}' of '{label}' is not a list: {other}");
                0
            }
        };
        counts.add(label, length);
    }
    counts
}

/// Group the records under `list_key` of the JSON file at `path` by `field`
pub fn group_count(path: &Path, list_key: &str, field: &str) -> Result<GroupCounts> {
    let records = load_records(path, list_key)?;
    let counts = group_records(&records, field);
    if let Some(missing) = counts.get(UNKNOWN_LABEL) {
        tracing::debug!("{missing} of {} records have no '{field}'", records.len());
    }
    Ok(counts)
}

/// Count nested list lengths per record label for the JSON file at `path`
pub fn nested_count(
    path: &Path,
    list_key: &str,
    label_field: &str,
    nested: &str,
) -> Result<GroupCounts> {
    let records = load_records(path, list_key)?;
    let counts = sum_nested_lengths(&records, label_field, nested);
    if counts.is_empty() {
        tracing::warn!("No records under '{list_key}' in {}", path.display());
    }
    Ok(counts)
}

fn label_of(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => UNKNOWN_LABEL.to_string(),
        Some(other) => other.to_string(),
    }
}

fn load_records(path: &Path, list_key: &str) -> Result<Vec<Value>> {
    let shown = path.display().to_string();

    let content = std::fs::read_to_string(path)
        .map_err(|e| fs::read_failed(&shown, e.to_string()))?;

    let root: Value = serde_json::from_str(&content)
        .map_err(|e| analysis::parse_failed(&shown, e.to_string()))?;

    let Value::Object(mut root) = root else {
        return Err(analysis::parse_failed(
            &shown,
            "top-level value is not an object",
        ));
    };

    match root.remove(list_key) {
        Some(Value::Array(records)) => Ok(records),
        None => {
            tracing::warn!("No '{list_key}' list in {shown}");
            Ok(Vec::new())
        }
        Some(_) => Err(analysis::parse_failed(
            &shown,
            format!("'{list_key}' is not a list"),
        )),
    }
}
