// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot AQI forecast timeline fetch.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

use super::api_client;

pub fn run(
    config_path: Option<&Path>,
    lat: Option<f64>,
    lon: Option<f64>,
    hours: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let lat = lat.unwrap_or(config.location.lat);
    let lon = lon.unwrap_or(config.location.lon);
    let hours = hours.unwrap_or(config.location.hours);

    let api = api_client(&config);
    let rt = tokio::runtime::Runtime::new()?;
    let timeline = rt.block_on(api.aqi_timeline(lat, lon, hours))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    if timeline.times.is_empty() {
        println!("No forecast data for {:.4}, {:.4}.", lat, lon);
        return Ok(());
    }

    println!("AQI forecast for {:.4}, {:.4} ({}h):", lat, lon, hours);
    for (time, aqi, category) in timeline.rows() {
        println!("  {:<25} {:>4.0}  {}", time, aqi, category);
    }
    if let Some((when, peak)) = timeline.peak() {
        println!("Peak: {:.0} at {}", peak, when);
    }

    Ok(())
}
