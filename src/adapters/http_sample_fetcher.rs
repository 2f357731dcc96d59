//! Sample fetcher implementation using reqwest.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::SampleFetcher;

/// HTTP transport for sample downloads.
///
/// Performs a single streaming GET per call. Nothing is retried; the fetch
/// loop isolates failures per table entry instead.
#[derive(Debug, Clone)]
pub struct HttpSampleFetcher {
    client: Client,
}

impl HttpSampleFetcher {
    /// Create a client with the given per-request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client =
            Client::builder().timeout(Duration::from_secs(timeout_secs)).build().map_err(|e| {
                AppError::Http {
                    message: format!("Failed to create HTTP client: {}", e),
                    status: None,
                }
            })?;
        Ok(Self { client })
    }
}

impl SampleFetcher for HttpSampleFetcher {
    fn download(&self, url: &Url, dest: &Path) -> Result<u64, AppError> {
        let mut response = self.client.get(url.clone()).send().map_err(|e| AppError::Http {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http {
                message: format!("GET {} returned {}", url, status),
                status: Some(status.as_u16()),
            });
        }

        let mut file = File::create(dest)?;
        let bytes = response.copy_to(&mut file).map_err(|e| AppError::Http {
            message: format!("Transfer from {} failed: {}", url, e),
            status: Some(status.as_u16()),
        })?;
        Ok(bytes)
    }
}
