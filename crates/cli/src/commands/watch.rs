// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Follow the live alert stream.
//!
//! Runs one [`LiveClient`] subscription until interrupted. Envelopes that
//! decode as alert broadcasts are rendered as one-line summaries; everything
//! else prints as JSON.

use std::path::Path;

use aero_core::{AlertEvent, Envelope};

use crate::config::Config;
use crate::error::Result;
use crate::live::{LiveClient, StatusEvent};

use super::api_client;

pub fn run(
    config_path: Option<&Path>,
    poll: bool,
    lat: Option<f64>,
    lon: Option<f64>,
    raw: bool,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let lat = lat.unwrap_or(config.location.lat);
    let lon = lon.unwrap_or(config.location.lon);

    let api = api_client(&config);
    let poll_url = api.timeline_poll_url(lat, lon, config.location.hours);
    let mut live_config = config.live_config(poll_url);
    if poll {
        // Skip the push channel entirely
        live_config.max_attempts = 0;
    }

    tracing::info!("watching {}", live_config.url);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let client = LiveClient::new(live_config);

        client.on_status(|event| match event {
            StatusEvent::Transition(state) => tracing::info!("live channel {}", state),
            StatusEvent::DiscardedMessage { detail } => {
                tracing::debug!("discarded message: {}", detail);
            }
            StatusEvent::PollFailed { detail } => tracing::warn!("poll failed: {}", detail),
        });
        client.on_data(move |envelope| print_envelope(&envelope, raw));

        client.start();
        let _ = tokio::signal::ctrl_c().await;
        client.stop();
    });

    Ok(())
}

fn print_envelope(envelope: &Envelope, raw: bool) {
    if raw {
        println!("{}", envelope);
        return;
    }
    match envelope.decode::<AlertEvent>() {
        Ok(event) if event.is_alert() => {
            let id = event
                .alert_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            let location = event.location.as_deref().unwrap_or("unknown location");
            let threshold = event
                .threshold_aqi
                .map(|t| format!("AQI over {}", t))
                .unwrap_or_else(|| "threshold crossed".to_string());
            println!("alert #{}: {} ({})", id, location, threshold);
        }
        _ => println!("{}", envelope),
    }
}
