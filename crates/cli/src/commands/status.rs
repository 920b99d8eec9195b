// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backend health check.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

use super::api_client;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let api = api_client(&config);
    let rt = tokio::runtime::Runtime::new()?;

    match rt.block_on(api.health()) {
        Ok(health) => {
            println!("Backend: {} ({})", config.server.base_url, health.status);
            for (name, version) in &health.dependencies {
                match version {
                    Some(v) => println!("  {:<14} {}", name, v),
                    None => println!("  {:<14} missing", name),
                }
            }
            Ok(())
        }
        Err(e) => {
            println!("Backend: {} (unreachable)", config.server.base_url);
            Err(e)
        }
    }
}
