//! HTTP client with rate limiting for zonaprop.com.ar
//!
//! This module provides a rate-limited HTTP client that spaces requests to
//! the site and retries transient errors with exponential backoff.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{Result, ZonaPropError};

/// Base URL listing paths resolve against
pub const BASE_URL: &str = "http://www.zonaprop.com.ar";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for Argentine content
const DEFAULT_ACCEPT_LANGUAGE: &str = "es-AR,es;q=0.9,en;q=0.8";

/// Maximum number of retry attempts for transient errors
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_RETRY_DELAY_MS: u64 = 1000;

/// Rate limiter to control request frequency
///
/// Ensures that requests are spaced at least `min_interval` apart so
/// crawling an index does not hammer the site.
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(Instant::now() - min_interval)),
        }
    }

    /// Acquire permission to make a request, waiting if the minimum
    /// interval since the previous one has not yet elapsed
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the ZonaProp HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 2.0,
            timeout_secs: 30,
        }
    }
}

/// HTTP client for zonaprop.com.ar with rate limiting and retry logic
pub struct ZonaPropClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Rate limiter for request throttling
    rate_limiter: RateLimiter,
}

impl ZonaPropClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(config.requests_per_second),
        })
    }

    /// Fetch HTML content from an absolute URL
    ///
    /// Handles rate limiting and retries automatically.
    ///
    /// # Errors
    /// - `ZonaPropError::InvalidUrl` - URL is not http(s)
    /// - `ZonaPropError::Http` - network or HTTP error after all retries
    /// - `ZonaPropError::RateLimited` - server returned 429 after all retries
    /// - `ZonaPropError::NotFound` - server returned 404
    pub async fn fetch(&self, url: &str) -> Result<String> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ZonaPropError::InvalidUrl(url.to_string()));
        }
        self.fetch_with_retry(url, 0).await
    }

    /// Internal method to fetch with retry logic
    fn fetch_with_retry<'a>(
        &'a self,
        url: &'a str,
        attempt: u32,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.rate_limiter.acquire().await;

            let response = self.client.get(url).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response.text().await?);
            }

            // 404 is final, no retry
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ZonaPropError::NotFound(url.to_string()));
            }

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                if attempt < MAX_RETRIES {
                    sleep(backoff_delay(attempt)).await;
                    return self.fetch_with_retry(url, attempt + 1).await;
                }
                return Err(ZonaPropError::RateLimited);
            }

            if status.is_server_error() && attempt < MAX_RETRIES {
                sleep(backoff_delay(attempt)).await;
                return self.fetch_with_retry(url, attempt + 1).await;
            }

            Err(ZonaPropError::Http(
                response.error_for_status().unwrap_err(),
            ))
        })
    }
}

/// Exponential backoff delay for retry attempt `attempt`: 1s, 2s, 4s, ...
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(BASE_RETRY_DELAY_MS * 2u64.pow(attempt))
}
