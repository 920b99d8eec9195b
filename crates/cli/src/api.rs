// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed client for the forecast backend's HTTP API.
//!
//! Covers the endpoints the terminal client uses: health, forecast
//! timelines, and SMS alert subscriptions. Authenticated requests carry a
//! bearer token when an API key is configured.

use std::time::Duration;

use serde::Deserialize;

use aero_core::{AqiTimeline, ForecastTimeline, Health, NewSmsAlert, SmsAlert};

use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the forecast backend.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    api_key: Option<String>,
}

/// Response to alert creation: `{"id": ...}`.
#[derive(Debug, Deserialize)]
pub struct CreatedAlert {
    pub id: u64,
}

/// Response to alert deletion: `{"deleted": ...}`.
#[derive(Debug, Deserialize)]
pub struct DeletedAlert {
    pub deleted: u64,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        ApiClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            api_key: None,
        }
    }

    /// Attach an API key sent as a bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.decorate(self.http.get(format!("{}{}", self.base_url, path)))
    }

    fn decorate(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Reads the response body, mapping non-success statuses to [`Error::Api`].
    async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<Health> {
        let response = self.get("/api/health").send().await?;
        Self::read_json(response).await
    }

    /// `GET /api/forecast/timeline`
    pub async fn forecast_timeline(
        &self,
        lat: f64,
        lon: f64,
        hours: u32,
    ) -> Result<ForecastTimeline> {
        let response = self
            .get("/api/forecast/timeline")
            .query(&[("lat", lat), ("lon", lon)])
            .query(&[("hours", hours)])
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// `GET /api/forecast/aqi/timeline`
    pub async fn aqi_timeline(&self, lat: f64, lon: f64, hours: u32) -> Result<AqiTimeline> {
        let response = self
            .get("/api/forecast/aqi/timeline")
            .query(&[("lat", lat), ("lon", lon)])
            .query(&[("hours", hours)])
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// `GET /api/alerts/sms`
    pub async fn sms_alerts(&self) -> Result<Vec<SmsAlert>> {
        let response = self.get("/api/alerts/sms").send().await?;
        Self::read_json(response).await
    }

    /// `POST /api/alerts/sms`
    pub async fn create_sms_alert(&self, alert: &NewSmsAlert) -> Result<CreatedAlert> {
        let response = self
            .decorate(self.http.post(format!("{}/api/alerts/sms", self.base_url)))
            .json(alert)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// `DELETE /api/alerts/sms/{id}`
    pub async fn delete_sms_alert(&self, id: u64) -> Result<DeletedAlert> {
        let response = self
            .decorate(
                self.http
                    .delete(format!("{}/api/alerts/sms/{}", self.base_url, id)),
            )
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// The polling URL for the live client's fallback path.
    pub fn timeline_poll_url(&self, lat: f64, lon: f64, hours: u32) -> String {
        format!(
            "{}/api/forecast/timeline?lat={}&lon={}&hours={}",
            self.base_url, lat, lon, hours
        )
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
