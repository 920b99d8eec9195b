// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Response models for the forecast and health endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aqi::AqiCategory;

/// Raw model timeline from `GET /api/forecast/timeline`.
///
/// `times`, `mean`, `lower` and `upper` are parallel arrays; the backend
/// guarantees equal lengths but [`ForecastTimeline::points`] truncates to the
/// shortest to stay total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastTimeline {
    #[serde(default)]
    pub times: Vec<String>,
    #[serde(default)]
    pub mean: Vec<f64>,
    #[serde(default)]
    pub lower: Vec<f64>,
    #[serde(default)]
    pub upper: Vec<f64>,
}

impl ForecastTimeline {
    /// Number of forecast hours present.
    pub fn len(&self) -> usize {
        self.times.len().min(self.mean.len())
    }

    /// True when the timeline carries no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(time, mean)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.times
            .iter()
            .map(String::as_str)
            .zip(self.mean.iter().copied())
    }
}

/// Categorized timeline from `GET /api/forecast/aqi/timeline`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiTimeline {
    #[serde(default)]
    pub times: Vec<String>,
    #[serde(default)]
    pub aqi_mean: Vec<f64>,
    #[serde(default)]
    pub aqi_lower: Vec<f64>,
    #[serde(default)]
    pub aqi_upper: Vec<f64>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Model and source attribution, passed through untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<serde_json::Value>,
}

impl AqiTimeline {
    /// Iterates `(time, aqi, category)` rows, recomputing the category from
    /// the AQI value when the backend omits one.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64, AqiCategory)> {
        self.times
            .iter()
            .map(String::as_str)
            .zip(self.aqi_mean.iter().copied())
            .enumerate()
            .map(|(i, (time, aqi))| {
                let category = self
                    .categories
                    .get(i)
                    .and_then(|c| c.parse().ok())
                    .unwrap_or_else(|| AqiCategory::from_aqi(aqi));
                (time, aqi, category)
            })
    }

    /// The worst hour in the timeline, if any.
    pub fn peak(&self) -> Option<(&str, f64)> {
        self.times
            .iter()
            .map(String::as_str)
            .zip(self.aqi_mean.iter().copied())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub version: u32,
    /// Optional dependency versions; `None` means the dependency is missing.
    #[serde(default)]
    pub dependencies: BTreeMap<String, Option<String>>,
}

impl Health {
    /// True when the backend reports itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
#[path = "forecast_tests.rs"]
mod tests;
