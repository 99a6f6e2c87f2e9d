//! Input transport for streaming audits
//!
//! A source turns a URL into an ordered byte stream. The production
//! implementation streams over HTTP; tests inject in-memory sources through
//! the same trait, so the audit pipeline never knows the difference.

use std::io::Read;
use std::time::Duration;

use crate::error::{AuditError, Result};

/// Connect timeout for the HTTP source
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Whole-transfer timeout. Generous because audited drawings reach
/// gigabytes and are consumed at streaming pace.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Source of ordered byte chunks reachable by URL.
///
/// `open` reports acquisition failures (non-success status, unreachable
/// host) before any data is consumed; failures after `open` surface as read
/// errors on the returned stream.
pub trait ChunkSource {
    /// Open the stream behind `url`
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>>;
}

/// Production source streaming over HTTP with a blocking reqwest client.
///
/// The response body is consumed incrementally through its [`Read`]
/// implementation; it is never buffered whole.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Create a source with the default timeouts
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpSource { client })
    }
}

impl ChunkSource for HttpSource {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::HttpStatus(status.as_u16()));
        }
        Ok(Box::new(response))
    }
}

/// Check if a string is a remote URL (http:// or https://)
#[must_use]
pub fn is_remote_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
