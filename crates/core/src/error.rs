// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for aero-core operations.

use thiserror::Error;

/// All possible errors that can occur in aero-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown AQI category: '{0}'\n  hint: valid categories are: Good, Moderate, Unhealthy for Sensitive, Unhealthy, Very Unhealthy, Hazardous")]
    UnknownCategory(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for aero-core operations.
pub type Result<T> = std::result::Result<T, Error>;
