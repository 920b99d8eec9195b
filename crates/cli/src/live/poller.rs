// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pull-path data source.
//!
//! When the push channel is unavailable, the delivery client falls back to
//! fetching the data source on a fixed interval. Each tick issues exactly one
//! request; a failed tick never cancels the next one.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use aero_core::Envelope;

/// Error type for a single poll tick.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// The request could not be sent or the response not read.
    #[error("poll request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("poll request returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("poll response was not JSON: {0}")]
    Body(String),
}

/// Result type for poll operations.
pub type PollResult<T> = Result<T, PollError>;

/// A source the pull path fetches once per tick.
///
/// Mirrors the push transport's injectable-trait shape so tests can script
/// tick outcomes.
pub trait PullSource: Send {
    /// Fetch the current payload.
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = PollResult<Envelope>> + Send + '_>>;
}

/// HTTP pull source: one GET against a fixed URL per tick.
///
/// The owning consumer supplies the full URL, including query parameters.
pub struct HttpPullSource {
    http: reqwest::Client,
    url: String,
}

impl HttpPullSource {
    /// Per-request timeout. Kept under the default poll interval so a hung
    /// request cannot stack ticks.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

    /// Create a pull source fetching the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        HttpPullSource {
            http,
            url: url.into(),
        }
    }

    /// Create a pull source with a caller-provided HTTP client.
    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        HttpPullSource {
            http,
            url: url.into(),
        }
    }

    /// The URL fetched each tick.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PullSource for HttpPullSource {
    fn fetch(&mut self) -> Pin<Box<dyn Future<Output = PollResult<Envelope>> + Send + '_>> {
        Box::pin(async move {
            let response = self
                .http
                .get(&self.url)
                .send()
                .await
                .map_err(|e| PollError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(PollError::Status(status.as_u16()));
            }

            let value: serde_json::Value = response
                .json()
                .await
                .map_err(|e| PollError::Body(e.to_string()))?;
            Ok(Envelope::new(value))
        })
    }
}
