//! HTTP transport used by the fetcher
//!
//! The [`Transport`] trait is the seam between the fetcher and the network.
//! [`HttpTransport`] is the real implementation; tests substitute their own.

use std::time::Duration;

use crate::error::{Result, fetch};

/// Sent with every request
pub const USER_AGENT: &str = concat!("datafun/", env!("CARGO_PKG_VERSION"));

/// Status and raw body bytes of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a plain GET and returns whatever the server answered.
///
/// Implementations report transport failures (DNS, connect, timeout, broken
/// body) as errors and leave status handling to the caller.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Blocking `reqwest` transport with a request timeout
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| fetch::validation_failed(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch::network_failed(url, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| fetch::network_failed(url, format!("failed to read body: {e}")))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
