//! Sample retrieval port definition.

use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// Port for retrieving one remote sample and persisting it locally.
pub trait SampleFetcher {
    /// Stream the resource at `url` into the file at `dest`.
    ///
    /// Returns the number of bytes written. Any transport or HTTP-status
    /// failure is an error; the caller decides whether to continue.
    fn download(&self, url: &Url, dest: &Path) -> Result<u64, AppError>;
}

/// Fetcher for testing without network access.
///
/// Writes a fixed payload for every URL, except those listed as failing,
/// which error without touching the destination.
#[derive(Debug, Clone, Default)]
pub struct MockSampleFetcher {
    failing: Vec<String>,
}

impl MockSampleFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark URLs containing the given substring as failing.
    pub fn failing_on<S: Into<String>>(mut self, needle: S) -> Self {
        self.failing.push(needle.into());
        self
    }
}

impl SampleFetcher for MockSampleFetcher {
    fn download(&self, url: &Url, dest: &Path) -> Result<u64, AppError> {
        if self.failing.iter().any(|needle| url.as_str().contains(needle.as_str())) {
            return Err(AppError::Http {
                message: format!("HTTP request failed: {} unreachable", url),
                status: None,
            });
        }
        let payload = format!("mock bytes for {}", url);
        std::fs::write(dest, &payload)?;
        Ok(payload.len() as u64)
    }
}
