//! HTTP metrics source.
//!
//! Issues a plain `GET` against the analytics endpoint: no body, no
//! headers beyond the client defaults, no authentication. The optional date
//! range is the only thing ever added to the URL.

use std::time::Duration;

use async_trait::async_trait;
use minidash_common::config::DashboardConfig;
use minidash_common::constants::{QUERY_END, QUERY_START};
use minidash_common::types::{DateRange, MetricsCollection};
use reqwest::{Client, Url};

use crate::decode::decode_metrics;
use crate::error::FetchError;
use crate::source::MetricsSource;

/// Fetches metrics from an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpMetricsSource {
    client: Client,
    url: Url,
}

impl HttpMetricsSource {
    /// Creates a source for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Endpoint` if `endpoint` is not an absolute
    /// http(s) URL, or `FetchError::Transport` if the client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, FetchError> {
        let url = Url::parse(endpoint.trim()).map_err(|e| FetchError::Endpoint {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::Endpoint {
                endpoint: endpoint.to_string(),
                message: format!("unsupported scheme {}", url.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        Ok(Self { client, url })
    }

    /// Creates a source from a dashboard configuration, applying its date range.
    ///
    /// # Errors
    ///
    /// See [`HttpMetricsSource::new`].
    pub fn from_config(config: &DashboardConfig) -> Result<Self, FetchError> {
        Ok(Self::new(&config.endpoint, config.timeout())?.with_range(&config.range))
    }

    /// Restricts the request to `range`. An unbounded range leaves the URL untouched.
    ///
    /// `start`/`end` keys already present on the endpoint are replaced, other
    /// query parameters are kept in order.
    #[must_use]
    pub fn with_range(mut self, range: &DateRange) -> Self {
        let pairs = range.query_pairs();
        if pairs.is_empty() {
            return self;
        }

        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != QUERY_START && key != QUERY_END)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        self.url.set_query(None);
        {
            let mut query = self.url.query_pairs_mut();
            let _ = query.extend_pairs(&kept);
            for (key, value) in &pairs {
                let _ = query.append_pair(key, value);
            }
        }
        self
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    fn endpoint(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch(&self) -> Result<MetricsCollection, FetchError> {
        tracing::debug!(url = %self.url, "fetching metrics");

        let transport = |source| FetchError::Transport {
            endpoint: self.url.to_string(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let metrics = decode_metrics(&body)?;
        tracing::info!(url = %self.url, records = metrics.len(), "metrics fetched");
        Ok(metrics)
    }
}
