//! Resource fetching
//!
//! This module handles:
//! - Rejecting empty resource references before touching the network
//! - Mapping transport failures and non-2xx statuses to typed errors
//! - Decoding text bodies as UTF-8 and parsing structured (JSON) bodies,
//!   preserving key order; binary bodies are kept as they arrived
//!
//! The fetcher never writes files; persisting content is the writer's job.

pub mod transport;

pub use transport::{HttpTransport, Transport, USER_AGENT};

use crate::domain::{ContentKind, FetchedContent, ResourceRef};
use crate::error::{DatafunError, Result, analysis, fetch};

/// Retrieves resources through a [`Transport`]
pub struct Fetcher<T: Transport = HttpTransport> {
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch one resource, logging any failure at the point it happens
    pub fn fetch(&self, resource: &ResourceRef) -> Result<FetchedContent> {
        if resource.is_empty() {
            tracing::error!("The URL provided is empty. Please provide a valid URL.");
            return Err(DatafunError::EmptyLocation);
        }

        let url = resource.location.trim();
        tracing::info!("Fetching {} data from {}...", resource.kind, url);

        let response = self.transport.get(url).inspect_err(|e| {
            tracing::error!("Request error occurred: {e}");
        })?;

        if !response.is_success() {
            tracing::error!("HTTP error occurred: {} for url {}", response.status, url);
            return Err(fetch::remote_status(url, response.status));
        }

        let content = decode(resource.kind, url, response.body).inspect_err(|e| {
            tracing::error!("Could not decode response: {e}");
        })?;

        tracing::debug!("Fetched {} content from {}", content.kind(), url);
        Ok(content)
    }
}

fn decode(kind: ContentKind, url: &str, body: Vec<u8>) -> Result<FetchedContent> {
    match kind {
        ContentKind::Text | ContentKind::Tabular => Ok(FetchedContent::Text {
            kind,
            body: to_text(url, body),
        }),
        ContentKind::Structured => serde_json::from_slice(&body)
            .map(FetchedContent::Structured)
            .map_err(|e| analysis::parse_failed(format!("JSON from {url}"), e.to_string())),
        ContentKind::Binary => Ok(FetchedContent::Binary(body)),
    }
}

fn to_text(url: &str, body: Vec<u8>) -> String {
    String::from_utf8(body).unwrap_or_else(|e| {
        tracing::warn!("Body from {url} is not valid UTF-8, replacing invalid bytes");
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}
