// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connection state, delivery mode, and reconnect bookkeeping.

use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::time::Duration;

/// State of the live connection, owned by [`LiveClient`](super::LiveClient).
///
/// [`LiveClient`]: super::LiveClient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    /// Constructed but never started.
    Idle = 0,
    /// Attempting to open the push channel.
    Connecting = 1,
    /// Push channel open.
    Connected = 2,
    /// Push channel closed or not yet retried.
    Disconnected = 3,
    /// Reconnect budget spent; no further attempts until restarted.
    Failed = 4,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Idle => "idle",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Failed => "failed",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Connected,
            3 => ConnectionState::Disconnected,
            4 => ConnectionState::Failed,
            _ => ConnectionState::Idle,
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which delivery path currently owns the stream.
///
/// At most one path is ever active for a client; the driver task runs them
/// strictly in sequence, so "both active" has no representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeliveryMode {
    /// No driver running.
    Inactive = 0,
    /// WebSocket push channel.
    Push = 1,
    /// Periodic HTTP polling.
    Poll = 2,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Inactive => "inactive",
            DeliveryMode::Push => "push",
            DeliveryMode::Poll => "poll",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => DeliveryMode::Push,
            2 => DeliveryMode::Poll,
            _ => DeliveryMode::Inactive,
        }
    }
}

/// Events delivered to the status handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// The connection state changed.
    Transition(ConnectionState),
    /// A push payload failed to parse and was dropped. The connection is
    /// unaffected.
    DiscardedMessage { detail: String },
    /// A poll tick failed. The next tick fires on schedule.
    PollFailed { detail: String },
}

/// Connection state visible to both the driver task and callers.
///
/// Uses atomic fields for lock-free reads from handlers and status queries.
pub struct SharedState {
    state: AtomicU8,
    mode: AtomicU8,
    /// Connection attempt count (for status reporting).
    attempt: AtomicU32,
}

impl SharedState {
    pub fn new() -> Self {
        SharedState {
            state: AtomicU8::new(ConnectionState::Idle as u8),
            mode: AtomicU8::new(DeliveryMode::Inactive as u8),
            attempt: AtomicU32::new(0),
        }
    }

    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Sets the state, returning the previous value.
    pub fn swap_state(&self, state: ConnectionState) -> ConnectionState {
        ConnectionState::from_u8(self.state.swap(state as u8, Ordering::AcqRel))
    }

    pub fn mode(&self) -> DeliveryMode {
        DeliveryMode::from_u8(self.mode.load(Ordering::Acquire))
    }

    pub fn set_mode(&self, mode: DeliveryMode) {
        self.mode.store(mode as u8, Ordering::Release);
    }

    pub fn attempt(&self) -> u32 {
        self.attempt.load(Ordering::Acquire)
    }

    pub fn set_attempt(&self, attempt: u32) {
        self.attempt.store(attempt, Ordering::Release);
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconnect budget with linear backoff.
///
/// The delay before retry `n` is exactly `base_delay * n`. Linear (rather
/// than exponential) growth is intentional and pinned by tests.
#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    /// Connection attempts made since the last success.
    attempt: u32,
    max_attempts: u32,
    base_delay: Duration,
}

impl ReconnectPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        ReconnectPolicy {
            attempt: 0,
            max_attempts,
            base_delay,
        }
    }

    /// Attempts made since the last successful connection.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// The delay scheduled after failure number `n`.
    pub fn delay(&self, n: u32) -> Duration {
        self.base_delay * n
    }

    /// Records a failed connection attempt.
    ///
    /// Returns the delay to wait before retrying, or `None` when the budget
    /// is spent.
    pub fn record_failure(&mut self) -> Option<Duration> {
        self.attempt = self.attempt.saturating_add(1);
        if self.attempt >= self.max_attempts {
            None
        } else {
            Some(self.delay(self.attempt))
        }
    }

    /// Resets the attempt counter after a successful connection.
    pub fn reset(&mut self) {
        self.attempt = 0;
    }
}
