// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::alert::AlertEvent;

#[test]
fn from_json_accepts_any_valid_json() {
    let env = Envelope::from_json(r#"{"ready": true}"#).unwrap();
    assert_eq!(env.as_value()["ready"], serde_json::json!(true));

    // Non-object payloads are valid too - the envelope is opaque
    let env = Envelope::from_json("[1, 2, 3]").unwrap();
    assert!(env.as_value().is_array());
}

#[test]
fn from_json_rejects_malformed_text() {
    assert!(Envelope::from_json("not json").is_err());
    assert!(Envelope::from_json("{\"unterminated\":").is_err());
}

#[test]
fn decode_into_concrete_type() {
    let env = Envelope::from_json(
        r#"{"type": "alert", "alert_id": 7, "location": "downtown", "threshold_aqi": 150}"#,
    )
    .unwrap();
    let event: AlertEvent = env.decode().unwrap();
    assert_eq!(event.alert_id, Some(7));
    assert_eq!(event.location.as_deref(), Some("downtown"));
    assert_eq!(event.threshold_aqi, Some(150));
}

#[test]
fn decode_mismatched_shape_fails_without_consuming() {
    let env = Envelope::from_json(r#"{"ready": true}"#).unwrap();
    let result: Result<Vec<u32>, _> = env.decode();
    assert!(result.is_err());
    // Envelope is still usable after a failed decode
    assert_eq!(env.as_value()["ready"], serde_json::json!(true));
}

#[test]
fn display_renders_compact_json() {
    let env = Envelope::from_json(r#"{"a": 1}"#).unwrap();
    assert_eq!(env.to_string(), r#"{"a":1}"#);
}
