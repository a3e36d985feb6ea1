//! Resource domain types
//!
//! A resource reference names something to fetch; fetched content is what
//! came back, held only until the writer persists it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a remote resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Plain text, persisted verbatim
    Text,
    /// Delimited rows with a header line, persisted verbatim
    #[serde(alias = "csv")]
    Tabular,
    /// Hierarchical key-value data (JSON), persisted pretty-printed
    #[serde(alias = "json")]
    Structured,
    /// Opaque bytes such as a spreadsheet, persisted verbatim
    #[serde(alias = "excel")]
    Binary,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Text => "text",
            ContentKind::Tabular => "tabular",
            ContentKind::Structured => "structured",
            ContentKind::Binary => "binary",
        };
        f.write_str(name)
    }
}

/// Location of a remote resource plus its declared kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub location: String,
    pub kind: ContentKind,
}

impl ResourceRef {
    pub fn new(location: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }

    /// True when there is nothing to fetch
    pub fn is_empty(&self) -> bool {
        self.location.trim().is_empty()
    }
}

/// Content retrieved for a resource reference
#[derive(Debug, Clone, PartialEq)]
pub enum FetchedContent {
    /// Raw text of a text or tabular resource
    Text { kind: ContentKind, body: String },
    /// Parsed structured value, key order preserved
    Structured(serde_json::Value),
    /// Undecoded bytes of a binary resource
    Binary(Vec<u8>),
}

impl FetchedContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            FetchedContent::Text { kind, .. } => *kind,
            FetchedContent::Structured(_) => ContentKind::Structured,
            FetchedContent::Binary(_) => ContentKind::Binary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_ref_is_empty() {
        assert!(ResourceRef::new("", ContentKind::Text).is_empty());
        assert!(ResourceRef::new("   ", ContentKind::Text).is_empty());
        assert!(!ResourceRef::new("http://example.com/a.txt", ContentKind::Text).is_empty());
    }

    #[test]
    fn test_content_kind_aliases() {
        let kinds: Vec<ContentKind> =
            serde_yaml::from_str("[text, tabular, csv, structured, json, binary, excel]").unwrap();
        assert_eq!(
            kinds,
            vec![
                ContentKind::Text,
                ContentKind::Tabular,
                ContentKind::Tabular,
                ContentKind::Structured,
                ContentKind::Structured,
                ContentKind::Binary,
                ContentKind::Binary,
            ]
        );
    }

    #[test]
    fn test_fetched_content_kind() {
        let text = FetchedContent::Text {
            kind: ContentKind::Tabular,
            body: "a,b\n1,2\n".to_string(),
        };
        assert_eq!(text.kind(), ContentKind::Tabular);

        let json = FetchedContent::Structured(serde_json::json!({"number": 3}));
        assert_eq!(json.kind(), ContentKind::Structured);

        let sheet = FetchedContent::Binary(vec![0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(sheet.kind(), ContentKind::Binary);
        assert_eq!(sheet.kind().to_string(), "binary");
    }
}
