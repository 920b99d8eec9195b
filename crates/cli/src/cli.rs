// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "aero")]
#[command(about = "Terminal client for air-quality forecasts and live alerts")]
#[command(
    long_about = "Terminal client for an air-quality forecast backend.\n\n\
    Fetch AQI forecast timelines, manage SMS alert subscriptions, and follow\n\
    the live alert stream over WebSocket with automatic polling fallback."
)]
#[command(version)]
pub struct Cli {
    /// Path to config file (default: ~/.config/aero/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Follow the live alert stream
    Watch {
        /// Skip the WebSocket channel and poll the forecast endpoint instead
        #[arg(long)]
        poll: bool,

        /// Latitude for the polling fallback (default: from config)
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude for the polling fallback (default: from config)
        #[arg(long)]
        lon: Option<f64>,

        /// Print raw JSON payloads instead of decoded alert lines
        #[arg(long)]
        raw: bool,
    },

    /// Fetch the AQI forecast timeline for a location
    Forecast {
        /// Latitude (default: from config)
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude (default: from config)
        #[arg(long)]
        lon: Option<f64>,

        /// Forecast horizon in hours
        #[arg(long)]
        hours: Option<u32>,

        /// Emit the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Manage SMS alert subscriptions
    Alerts {
        #[command(subcommand)]
        command: AlertsCommand,
    },

    /// Check backend health
    Status,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum AlertsCommand {
    /// List alert subscriptions
    List,

    /// Create an alert subscription
    Add {
        /// Phone number in E.164 format
        phone: String,

        /// Latitude (default: from config)
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude (default: from config)
        #[arg(long)]
        lon: Option<f64>,

        /// AQI threshold that triggers the alert
        #[arg(long, default_value_t = 100)]
        threshold: i64,

        /// How many forecast hours ahead to scan
        #[arg(long, default_value_t = 12)]
        hours_ahead: i64,
    },

    /// Delete an alert subscription
    Remove {
        /// Subscription id
        id: u64,
    },
}
