// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque payload container for live data delivery.
//!
//! The live channel carries whatever JSON the backend broadcasts. The
//! delivery layer never interprets it; consumers decode the shapes they
//! care about with [`Envelope::decode`] and ignore the rest.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A single live-data payload, passed unmodified from transport to consumer.
///
/// Schema validation is a consumer responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(serde_json::Value);

impl Envelope {
    /// Wraps an already-parsed JSON value.
    pub fn new(value: serde_json::Value) -> Self {
        Envelope(value)
    }

    /// Parses a raw UTF-8 JSON text frame into an envelope.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        Ok(Envelope(serde_json::from_str(text)?))
    }

    /// Returns the raw JSON value.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the envelope, returning the raw JSON value.
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Attempts to decode the payload into a concrete type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.0.clone())
    }
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
