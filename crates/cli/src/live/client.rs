// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live delivery client.
//!
//! [`LiveClient`] keeps one logical subscription to the backend's live
//! channel. It prefers the WebSocket push path and, once the reconnect
//! budget is spent, falls back to polling the forecast endpoint. Consumers
//! see a single stream of envelopes either way.
//!
//! One instance owns one subscription target. Construct it where the
//! subscription is owned and drive it with [`start`](LiveClient::start) /
//! [`stop`](LiveClient::stop); both are idempotent, and `stop` is safe to
//! call from inside a handler.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use aero_core::Envelope;

use super::poller::{HttpPullSource, PullSource};
use super::state::{ConnectionState, DeliveryMode, ReconnectPolicy, SharedState, StatusEvent};
use super::transport::{PushTransport, WebSocketTransport};

/// Configuration for the live delivery client.
#[derive(Debug, Clone)]
pub struct LiveConfig {
    /// WebSocket URL of the live channel.
    pub url: String,
    /// URL fetched by the polling fallback, query parameters included.
    pub poll_url: String,
    /// Maximum connection attempts before the push path gives up.
    /// 0 means the push path is never attempted.
    pub max_attempts: u32,
    /// Base reconnect delay; the delay before retry `n` is `base_delay * n`.
    pub base_delay: Duration,
    /// Fixed interval between poll ticks.
    pub poll_interval: Duration,
    /// Whether to start polling once the push budget is spent.
    pub fall_back_to_poll: bool,
}

impl Default for LiveConfig {
    fn default() -> Self {
        LiveConfig {
            url: "ws://localhost:8000/ws/alerts".to_string(),
            poll_url: "http://localhost:8000/api/forecast/timeline?lat=34.0522&lon=-118.2437&hours=24".to_string(),
            max_attempts: 5,
            base_delay: Duration::from_millis(1000),
            poll_interval: Duration::from_millis(5000),
            fall_back_to_poll: true,
        }
    }
}

type DataHandler = Arc<dyn Fn(Envelope) + Send + Sync>;
type StatusHandler = Arc<dyn Fn(StatusEvent) + Send + Sync>;

/// Handler slots. Single slot each: registering replaces the previous
/// handler, last registration wins.
#[derive(Default)]
struct Handlers {
    data: Mutex<Option<DataHandler>>,
    status: Mutex<Option<StatusHandler>>,
}

impl Handlers {
    /// Invoke the data handler unless the subscription was torn down.
    fn deliver(&self, cancel: &CancellationToken, envelope: Envelope) {
        if cancel.is_cancelled() {
            return;
        }
        let handler = self.data.lock().ok().and_then(|slot| slot.clone());
        if let Some(handler) = handler {
            handler(envelope);
        }
    }

    /// Invoke the status handler unless the subscription was torn down.
    fn notify(&self, cancel: &CancellationToken, event: StatusEvent) {
        if cancel.is_cancelled() {
            return;
        }
        self.notify_unchecked(event);
    }

    fn notify_unchecked(&self, event: StatusEvent) {
        let handler = self.status.lock().ok().and_then(|slot| slot.clone());
        if let Some(handler) = handler {
            handler(event);
        }
    }
}

/// An active driver task.
struct RunHandle {
    cancel: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

/// Dual-path live data client: WebSocket push with polling fallback.
pub struct LiveClient<T: PushTransport + 'static = WebSocketTransport, S: PullSource + 'static = HttpPullSource>
{
    config: LiveConfig,
    handlers: Arc<Handlers>,
    shared: Arc<SharedState>,
    make_push: Arc<dyn Fn() -> T + Send + Sync>,
    make_pull: Arc<dyn Fn() -> S + Send + Sync>,
    run: Mutex<Option<RunHandle>>,
}

impl LiveClient<WebSocketTransport, HttpPullSource> {
    /// Create a client with the production transports.
    pub fn new(config: LiveConfig) -> Self {
        let poll_url = config.poll_url.clone();
        LiveClient {
            config,
            handlers: Arc::new(Handlers::default()),
            shared: Arc::new(SharedState::new()),
            make_push: Arc::new(WebSocketTransport::new),
            make_pull: Arc::new(move || HttpPullSource::new(poll_url.clone())),
            run: Mutex::new(None),
        }
    }
}

impl<T: PushTransport + 'static, S: PullSource + 'static> LiveClient<T, S> {
    /// Create a client with custom transports (for testing).
    pub fn with_transports(
        config: LiveConfig,
        make_push: impl Fn() -> T + Send + Sync + 'static,
        make_pull: impl Fn() -> S + Send + Sync + 'static,
    ) -> Self {
        LiveClient {
            config,
            handlers: Arc::new(Handlers::default()),
            shared: Arc::new(SharedState::new()),
            make_push: Arc::new(make_push),
            make_pull: Arc::new(make_pull),
            run: Mutex::new(None),
        }
    }

    /// Register the data handler. Replaces any previous handler.
    pub fn on_data(&self, handler: impl Fn(Envelope) + Send + Sync + 'static) {
        if let Ok(mut slot) = self.handlers.data.lock() {
            *slot = Some(Arc::new(handler));
        }
    }

    /// Register the status handler. Replaces any previous handler.
    ///
    /// Status events are informational; delivery never waits on them.
    pub fn on_status(&self, handler: impl Fn(StatusEvent) + Send + Sync + 'static) {
        if let Ok(mut slot) = self.handlers.status.lock() {
            *slot = Some(Arc::new(handler));
        }
    }

    /// Get the current connection state.
    pub fn state(&self) -> ConnectionState {
        self.shared.state()
    }

    /// Which delivery path is currently active.
    pub fn mode(&self) -> DeliveryMode {
        self.shared.mode()
    }

    /// Check if the push channel is connected.
    pub fn is_connected(&self) -> bool {
        self.shared.is_connected()
    }

    /// Start delivery. Idempotent: calling while running has no effect.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let Ok(mut run) = self.run.lock() else {
            return;
        };
        if let Some(handle) = run.as_ref() {
            if !handle.cancel.is_cancelled() && !handle.task.is_finished() {
                return;
            }
        }

        self.shared.set_attempt(0);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(drive(
            self.config.clone(),
            (self.make_push)(),
            (self.make_pull)(),
            Arc::clone(&self.shared),
            Arc::clone(&self.handlers),
            cancel.clone(),
        ));
        *run = Some(RunHandle { cancel, task });
    }

    /// Stop delivery and release the active path (socket or poll timer).
    ///
    /// Idempotent, and safe to call from inside a handler: teardown is
    /// signalled through the cancellation token, so no lock is held across
    /// the driver task. After `stop` returns, no further handler invocation
    /// is started; a later [`start`](Self::start) begins fresh.
    pub fn stop(&self) {
        let handle = self.run.lock().ok().and_then(|mut run| run.take());
        if let Some(handle) = handle {
            handle.cancel.cancel();
        }
        self.shared.set_mode(DeliveryMode::Inactive);
        self.shared.set_attempt(0);
        if self.shared.swap_state(ConnectionState::Disconnected) != ConnectionState::Disconnected {
            self.handlers
                .notify_unchecked(StatusEvent::Transition(ConnectionState::Disconnected));
        }
    }
}

impl<T: PushTransport + 'static, S: PullSource + 'static> Drop for LiveClient<T, S> {
    fn drop(&mut self) {
        if let Ok(mut run) = self.run.lock() {
            if let Some(handle) = run.take() {
                handle.cancel.cancel();
            }
        }
    }
}

/// Outcome of the push phase.
enum PushOutcome {
    /// Torn down via the cancellation token.
    Stopped,
    /// Reconnect budget spent.
    Exhausted,
}

/// Driver task: push phase first, then the polling fallback.
///
/// The two phases run strictly in sequence within this one task, so at most
/// one of {open socket, poll loop} ever exists per client.
async fn drive<T: PushTransport, S: PullSource>(
    config: LiveConfig,
    mut transport: T,
    source: S,
    shared: Arc<SharedState>,
    handlers: Arc<Handlers>,
    cancel: CancellationToken,
) {
    let exhausted = if config.max_attempts == 0 {
        // Push never attempted; go straight to polling.
        true
    } else {
        let outcome = push_phase(&config, &mut transport, &shared, &handlers, &cancel).await;
        let _ = transport.disconnect().await;
        match outcome {
            PushOutcome::Stopped => return,
            PushOutcome::Exhausted => true,
        }
    };
    // The push socket is released before the first poll tick.
    drop(transport);

    if exhausted && config.fall_back_to_poll && !cancel.is_cancelled() {
        poll_phase(&config, source, &shared, &handlers, &cancel).await;
    } else {
        shared.set_mode(DeliveryMode::Inactive);
    }
}

/// Push phase: connect, receive, reconnect with linear backoff.
async fn push_phase<T: PushTransport>(
    config: &LiveConfig,
    transport: &mut T,
    shared: &SharedState,
    handlers: &Handlers,
    cancel: &CancellationToken,
) -> PushOutcome {
    shared.set_mode(DeliveryMode::Push);
    let mut policy = ReconnectPolicy::new(config.max_attempts, config.base_delay);

    loop {
        if cancel.is_cancelled() {
            return PushOutcome::Stopped;
        }

        transition(shared, handlers, cancel, ConnectionState::Connecting);
        let connected = tokio::select! {
            _ = cancel.cancelled() => return PushOutcome::Stopped,
            result = transport.connect(&config.url) => result,
        };

        match connected {
            Ok(()) => {
                policy.reset();
                shared.set_attempt(0);
                transition(shared, handlers, cancel, ConnectionState::Connected);

                loop {
                    let message = tokio::select! {
                        _ = cancel.cancelled() => return PushOutcome::Stopped,
                        message = transport.recv() => message,
                    };
                    match message {
                        Ok(Some(text)) => match Envelope::from_json(&text) {
                            Ok(envelope) => handlers.deliver(cancel, envelope),
                            Err(e) => {
                                // Malformed payloads are dropped; only
                                // transport-level close/error reconnects.
                                tracing::debug!("dropping unparseable frame: {}", e);
                                handlers.notify(
                                    cancel,
                                    StatusEvent::DiscardedMessage {
                                        detail: e.to_string(),
                                    },
                                );
                            }
                        },
                        Ok(None) => {
                            tracing::info!("live channel closed by server");
                            break;
                        }
                        Err(e) => {
                            tracing::warn!("live channel dropped: {}", e);
                            break;
                        }
                    }
                }
                transition(shared, handlers, cancel, ConnectionState::Disconnected);
            }
            Err(e) => {
                tracing::warn!("live channel connect failed: {}", e);
                transition(shared, handlers, cancel, ConnectionState::Disconnected);
            }
        }

        match policy.record_failure() {
            Some(delay) => {
                shared.set_attempt(policy.attempt());
                tracing::debug!(
                    "reconnecting in {:?} (attempt {}/{})",
                    delay,
                    policy.attempt(),
                    config.max_attempts
                );
                tokio::select! {
                    _ = cancel.cancelled() => return PushOutcome::Stopped,
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            None => {
                tracing::warn!(
                    "live channel unavailable after {} attempts",
                    config.max_attempts
                );
                transition(shared, handlers, cancel, ConnectionState::Failed);
                return PushOutcome::Exhausted;
            }
        }
    }
}

/// Poll phase: fetch the data source on a fixed interval.
///
/// Tick failures are reported through the status handler; the next tick
/// always fires on schedule.
async fn poll_phase<S: PullSource>(
    config: &LiveConfig,
    mut source: S,
    shared: &SharedState,
    handlers: &Handlers,
    cancel: &CancellationToken,
) {
    shared.set_mode(DeliveryMode::Poll);
    tracing::info!("polling every {:?}", config.poll_interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(config.poll_interval) => {}
        }

        let fetched = tokio::select! {
            _ = cancel.cancelled() => return,
            fetched = source.fetch() => fetched,
        };
        match fetched {
            Ok(envelope) => handlers.deliver(cancel, envelope),
            Err(e) => {
                tracing::warn!("poll tick failed: {}", e);
                handlers.notify(
                    cancel,
                    StatusEvent::PollFailed {
                        detail: e.to_string(),
                    },
                );
            }
        }
    }
}

/// Publish a state change and notify the status handler when it changed.
fn transition(
    shared: &SharedState,
    handlers: &Handlers,
    cancel: &CancellationToken,
    to: ConnectionState,
) {
    if cancel.is_cancelled() {
        return;
    }
    if shared.swap_state(to) != to {
        handlers.notify(cancel, StatusEvent::Transition(to));
    }
}
