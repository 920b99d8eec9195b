// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! aerors - Terminal client library for air-quality forecasts and live alerts.
//!
//! This crate provides the functionality behind the `aero` CLI tool: a typed
//! client for the forecast backend's HTTP API and a live delivery client that
//! follows the alert stream over WebSocket with automatic polling fallback.
//!
//! # Main Components
//!
//! - [`api::ApiClient`] - typed HTTP client for forecast and alert endpoints
//! - [`live::LiveClient`] - push/pull live data delivery with reconnect
//! - [`Config`] - client configuration (server, live stream, location)
//! - [`Error`] - error types for all operations

mod cli;
mod commands;

pub mod api;
pub mod config;
pub mod error;
pub mod live;

pub use cli::{AlertsCommand, Cli, Command};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Watch {
            poll,
            lat,
            lon,
            raw,
        } => commands::watch::run(config_path, poll, lat, lon, raw),
        Command::Forecast {
            lat,
            lon,
            hours,
            json,
        } => commands::forecast::run(config_path, lat, lon, hours, json),
        Command::Alerts { command } => match command {
            AlertsCommand::List => commands::alerts::list(config_path),
            AlertsCommand::Add {
                phone,
                lat,
                lon,
                threshold,
                hours_ahead,
            } => commands::alerts::add(config_path, phone, lat, lon, threshold, hours_ahead),
            AlertsCommand::Remove { id } => commands::alerts::remove(config_path, id),
        },
        Command::Status => commands::status::run(config_path),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "aero", &mut std::io::stdout());
            Ok(())
        }
    }
}
