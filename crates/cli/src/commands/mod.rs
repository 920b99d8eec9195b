// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod alerts;
pub mod forecast;
pub mod status;
pub mod watch;

use crate::api::ApiClient;
use crate::config::Config;

/// Builds the backend client from configuration.
pub fn api_client(config: &Config) -> ApiClient {
    let client = ApiClient::new(config.server.base_url.clone());
    match &config.server.api_key {
        Some(key) => client.with_api_key(key.clone()),
        None => client,
    }
}
