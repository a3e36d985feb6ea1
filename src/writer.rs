//! Persisting fetched content and reports
//!
//! This module handles:
//! - Ensuring target directories exist (idempotent)
//! - Overwriting a named file with content serialized by its kind
//!
//! Text, tabular and binary content is written verbatim. Structured content
//! is pretty-printed with a four-space indent, keeping key order and nesting.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::FetchedContent;
use crate::error::{Result, analysis, fs};

const JSON_INDENT: &[u8] = b"    ";

/// Create `dir` and any missing parents; an existing directory is fine
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| fs::create_dir_failed(dir.display().to_string(), e.to_string()))
}

/// Write `content` to `dir/filename`, replacing whatever was there
pub fn write_content(dir: &Path, filename: &str, content: &FetchedContent) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    tracing::info!("Writing data to {}...", file_path.display());

    let bytes: Cow<'_, [u8]> = match content {
        FetchedContent::Text { body, .. } => Cow::Borrowed(body.as_bytes()),
        FetchedContent::Structured(value) => Cow::Owned(to_indented_json(value)?),
        FetchedContent::Binary(bytes) => Cow::Borrowed(bytes),
    };

    ensure_dir(dir)
        .and_then(|()| write_bytes(&file_path, &bytes))
        .inspect_err(|e| tracing::error!("Error writing to file {}: {e}", file_path.display()))?;

    tracing::info!("SUCCESS: Data written to {}", file_path.display());
    Ok(file_path)
}

/// Write text to `path`, creating its parent directory first
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))
}

fn to_indented_json(value: &serde_json::Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| analysis::parse_failed("JSON content", e.to_string()))?;
    Ok(buf)
}
