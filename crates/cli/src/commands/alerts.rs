// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SMS alert subscription management.

use std::path::Path;

use aero_core::NewSmsAlert;

use crate::config::Config;
use crate::error::Result;

use super::api_client;

pub fn list(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let api = api_client(&config);
    let rt = tokio::runtime::Runtime::new()?;
    let alerts = rt.block_on(api.sms_alerts())?;

    if alerts.is_empty() {
        println!("No alert subscriptions.");
        return Ok(());
    }

    for alert in alerts {
        let state = if alert.active { "active" } else { "paused" };
        println!(
            "#{:<4} {:<16} {:>9.4}, {:>9.4}  AQI>{:<4} {}h ahead  [{}]",
            alert.id,
            alert.phone,
            alert.lat,
            alert.lon,
            alert.threshold_aqi,
            alert.hours_ahead,
            state
        );
    }
    Ok(())
}

pub fn add(
    config_path: Option<&Path>,
    phone: String,
    lat: Option<f64>,
    lon: Option<f64>,
    threshold: i64,
    hours_ahead: i64,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let lat = lat.unwrap_or(config.location.lat);
    let lon = lon.unwrap_or(config.location.lon);

    let mut alert = NewSmsAlert::new(phone, lat, lon);
    alert.threshold_aqi = threshold;
    alert.hours_ahead = hours_ahead;

    let api = api_client(&config);
    let rt = tokio::runtime::Runtime::new()?;
    let created = rt.block_on(api.create_sms_alert(&alert))?;

    println!("Created alert subscription #{}.", created.id);
    Ok(())
}

pub fn remove(config_path: Option<&Path>, id: u64) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let api = api_client(&config);
    let rt = tokio::runtime::Runtime::new()?;
    let deleted = rt.block_on(api.delete_sms_alert(id))?;

    println!("Deleted alert subscription #{}.", deleted.deleted);
    Ok(())
}
