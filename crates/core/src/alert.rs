// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alert subscription models and the live alert broadcast event.

use serde::{Deserialize, Serialize};

/// An SMS alert subscription row from `GET /api/alerts/sms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsAlert {
    pub id: u64,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default = "default_threshold")]
    pub threshold_aqi: i64,
    #[serde(default = "default_hours_ahead")]
    pub hours_ahead: i64,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Quiet-hours window, hours in UTC (0-23). May wrap midnight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet_start_h: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet_end_h: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sent: Option<String>,
}

/// Request body for `POST /api/alerts/sms`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSmsAlert {
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
    pub threshold_aqi: i64,
    pub hours_ahead: i64,
}

impl NewSmsAlert {
    pub fn new(phone: impl Into<String>, lat: f64, lon: f64) -> Self {
        NewSmsAlert {
            phone: phone.into(),
            lat,
            lon,
            threshold_aqi: default_threshold(),
            hours_ahead: default_hours_ahead(),
        }
    }
}

fn default_threshold() -> i64 {
    100
}

fn default_hours_ahead() -> i64 {
    12
}

fn default_active() -> bool {
    true
}

/// An alert broadcast received over the live channel.
///
/// The backend sends `{"type": "alert", ...}`; every field beyond the tag is
/// optional so partial payloads still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_aqi: Option<i64>,
}

impl AlertEvent {
    /// True for alert broadcasts (as opposed to e.g. the ready handshake).
    pub fn is_alert(&self) -> bool {
        self.kind == "alert"
    }
}

#[cfg(test)]
#[path = "alert_tests.rs"]
mod tests;
