// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! EPA AQI category bands.
//!
//! Band edges follow the backend's categorization: an AQI value maps to the
//! first band whose upper edge it does not exceed, with everything above 300
//! classed as Hazardous.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Health category for an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive")]
    UnhealthyForSensitive,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    #[serde(rename = "Hazardous")]
    Hazardous,
}

impl AqiCategory {
    /// Categorizes an AQI value (0-500 scale).
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiCategory::Good
        } else if aqi <= 100.0 {
            AqiCategory::Moderate
        } else if aqi <= 150.0 {
            AqiCategory::UnhealthyForSensitive
        } else if aqi <= 200.0 {
            AqiCategory::Unhealthy
        } else if aqi <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// The backend's label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for Sensitive",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Legend hex color for map and terminal rendering.
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00FF00",
            AqiCategory::Moderate => "#FFFF00",
            AqiCategory::UnhealthyForSensitive => "#FF9900",
            AqiCategory::Unhealthy => "#FF0000",
            AqiCategory::VeryUnhealthy => "#990099",
            AqiCategory::Hazardous => "#660000",
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AqiCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Good" => Ok(AqiCategory::Good),
            "Moderate" => Ok(AqiCategory::Moderate),
            // The backend abbreviates this band in some payloads
            "Unhealthy for Sensitive" | "USG" => Ok(AqiCategory::UnhealthyForSensitive),
            "Unhealthy" => Ok(AqiCategory::Unhealthy),
            "Very Unhealthy" => Ok(AqiCategory::VeryUnhealthy),
            "Hazardous" => Ok(AqiCategory::Hazardous),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "aqi_tests.rs"]
mod tests;
