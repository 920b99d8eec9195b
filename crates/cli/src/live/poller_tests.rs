// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the pull-path data source, plus the mock used in client tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aero_core::Envelope;

use super::poller::{HttpPullSource, PollError, PollResult, PullSource};

/// Scripted pull source: each fetch pops the next outcome.
///
/// Clones share the script and the fetch counter.
#[derive(Clone)]
pub(crate) struct MockPullSource {
    outcomes: Arc<Mutex<VecDeque<PollResult<Envelope>>>>,
    fetches: Arc<AtomicU32>,
}

impl MockPullSource {
    pub(crate) fn new() -> Self {
        MockPullSource {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            fetches: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Script a successful tick delivering the given JSON payload.
    pub(crate) fn push_ok(&self, json: serde_json::Value) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(Envelope::new(json)));
    }

    /// Script a failed tick.
    pub(crate) fn push_err(&self, detail: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(PollError::Request(detail.into())));
    }

    /// Number of fetches observed.
    pub(crate) fn fetches(&self) -> u32 {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl PullSource for MockPullSource {
    fn fetch(
        &mut self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = PollResult<Envelope>> + Send + '_>>
    {
        Box::pin(async move {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(PollError::Request("no scripted outcome".into())))
        })
    }
}

#[tokio::test]
async fn mock_pull_source_pops_outcomes_in_order() {
    let mut source = MockPullSource::new();
    source.push_err("down");
    source.push_ok(serde_json::json!({"mean": [42.0]}));

    assert!(source.fetch().await.is_err());
    let envelope = source.fetch().await.unwrap();
    assert_eq!(envelope.as_value()["mean"][0], serde_json::json!(42.0));
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn http_pull_source_fetches_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forecast/timeline"))
        .and(query_param("lat", "34.0522"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "times": ["2026-08-05T00:00:00Z"],
            "mean": [57.0]
        })))
        .mount(&server)
        .await;

    let url = format!(
        "{}/api/forecast/timeline?lat=34.0522&lon=-118.2437&hours=24",
        server.uri()
    );
    let mut source = HttpPullSource::new(&url);
    assert_eq!(source.url(), url);

    let envelope = source.fetch().await.unwrap();
    assert_eq!(envelope.as_value()["mean"][0], serde_json::json!(57.0));
}

#[tokio::test]
async fn http_pull_source_maps_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut source = HttpPullSource::new(format!("{}/api/forecast/timeline", server.uri()));
    assert!(matches!(source.fetch().await, Err(PollError::Status(503))));
}

#[tokio::test]
async fn http_pull_source_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let mut source = HttpPullSource::new(format!("{}/api/forecast/timeline", server.uri()));
    assert!(matches!(source.fetch().await, Err(PollError::Body(_))));
}

#[tokio::test]
async fn http_pull_source_reports_unreachable_host() {
    // Nothing listens on this port
    let mut source = HttpPullSource::new("http://127.0.0.1:9/api/forecast/timeline");
    assert!(matches!(source.fetch().await, Err(PollError::Request(_))));
}
