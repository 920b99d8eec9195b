// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live data delivery for the alert stream.
//!
//! Maintains one logical subscription to the backend, preferring the
//! WebSocket push channel and transparently substituting periodic HTTP
//! polling when the channel cannot be established or drops for good.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌─────────────┐
//! │  Consumer   │◄────│  LiveClient   │────►│ PushTransport│──► ws://.../ws/alerts
//! │ (callbacks) │     │ (driver task) │     ├─────────────┤
//! └─────────────┘     └───────────────┘     │ PullSource  │──► GET /api/forecast/...
//!                                           └─────────────┘
//! ```
//!
//! # Features
//!
//! - WebSocket subscription with linear-backoff reconnect
//! - Polling fallback once the reconnect budget is spent
//! - Single callback interface regardless of the active path
//! - Injectable transport traits for testing

mod client;
mod poller;
mod state;
mod transport;

pub use client::{LiveClient, LiveConfig};
pub use poller::{HttpPullSource, PollError, PullSource};
pub use state::{ConnectionState, DeliveryMode, ReconnectPolicy, SharedState, StatusEvent};
pub use transport::{PushTransport, TransportError, WebSocketTransport};


#[cfg(test)]
mod poller_tests;


#[cfg(test)]
mod transport_tests;
