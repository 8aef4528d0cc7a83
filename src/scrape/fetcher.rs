//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made during a scrape:
//! - Building HTTP clients (timeouts and compression only, no custom headers)
//! - GET requests for the landing page and each year page
//! - Classifying responses (only HTTP 200 counts as success)
//!
//! There is no retry logic: any failure is reported to the caller, which
//! aborts the scrape.

use crate::config::HttpConfig;
use crate::CruiseError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Server answered HTTP 200
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with any status other than 200
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the body of a successful fetch
    ///
    /// Any other outcome becomes [`CruiseError::UnreachableSite`], tagged with
    /// the year being collected (`None` for the landing page).
    pub fn into_body(self, url: &str, year: Option<&str>) -> Result<String, CruiseError> {
        let reason = match self {
            FetchResult::Success { body, .. } => return Ok(body),
            FetchResult::HttpError { status_code } => format!("HTTP {}", status_code),
            FetchResult::NetworkError { error } => error,
        };

        Err(CruiseError::UnreachableSite {
            url: url.to_string(),
            year: year.map(str::to_string),
            reason,
        })
    }
}

/// Source of page bodies
///
/// The scrape only ever has one request in flight; implementations do not
/// need to support concurrent calls, but must be shareable across awaits.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues a GET for `url` and classifies the outcome
    async fn fetch(&self, url: &str) -> FetchResult;
}

#[async_trait]
impl<'a, T: Fetcher + ?Sized> Fetcher for &'a T {
    async fn fetch(&self, url: &str) -> FetchResult {
        (**self).fetch(url).await
    }
}

/// [`Fetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with a freshly configured client
    pub fn new(http: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(http)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `http` - Timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use cruise_calendar::config::HttpConfig;
/// use cruise_calendar::scrape::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(http: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the response
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | `Success` with the body |
/// | Any other status | `HttpError` |
/// | Timeout | `NetworkError` ("Request timeout") |
/// | Connection refused | `NetworkError` ("Connection refused") |
/// | Body read failure | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("GET {} failed: {}", url, e);
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            return FetchResult::NetworkError { error };
        }
    };

    let status = response.status();
    let final_url = response.url().to_string();
    tracing::debug!("GET {} -> {}", url, status);

    if status != StatusCode::OK {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}
