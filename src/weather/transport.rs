//! The HTTP seam: a [`Transport`] trait, the real retrying client, and the
//! caching decorator the weather client runs behind.

use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::RetryTransientMiddleware;
use reqwest_retry::policies::ExponentialBackoff;
use tracing::debug;

use super::cache::ResponseCache;
use super::error::WeatherError;

/// Retry budget for transient failures.
const MAX_RETRIES: u32 = 5;
/// First backoff step; later steps grow exponentially from here.
const MIN_BACKOFF: Duration = Duration::from_millis(200);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Fetches a URL and returns the response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, WeatherError>;
}

/// Real transport: reqwest behind retry middleware.
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl HttpTransport {
    pub fn new() -> Self {
        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(MIN_BACKOFF, MAX_BACKOFF)
            .build_with_max_retries(MAX_RETRIES);
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, WeatherError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Caching decorator: answers from the response cache when a fresh entry
/// exists, otherwise delegates to the inner transport and stores the body.
pub struct CachedTransport<T> {
    inner: T,
    cache: ResponseCache,
    ttl: Duration,
}

impl<T> CachedTransport<T> {
    pub fn new(inner: T, cache: ResponseCache, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }
}

#[async_trait]
impl<T: Transport> Transport for CachedTransport<T> {
    async fn fetch(&self, url: &str) -> Result<String, WeatherError> {
        if let Some(body) = self.cache.get(url)? {
            return Ok(body);
        }
        let body = self.inner.fetch(url).await?;
        self.cache.put(url, &body, self.ttl)?;
        Ok(body)
    }
}
