// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the push transport, plus the mock used across live tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use super::transport::{PushTransport, TransportError, TransportResult};

/// A scripted frame the mock will hand to `recv`.
enum Frame {
    Text(String),
    /// Orderly close: `recv` returns `Ok(None)`.
    Close,
    /// Transport failure: `recv` returns an error.
    Error(String),
}

struct MockInner {
    frames: Mutex<VecDeque<Frame>>,
    notify: Notify,
    /// Number of upcoming connect calls that should fail.
    connect_failures: AtomicU32,
    /// Total connect calls observed.
    connects: AtomicU32,
    open: AtomicBool,
    sent: Mutex<Vec<String>>,
}

/// Mock push transport for testing without real sockets.
///
/// Clones share one script and one connection flag, so a test can keep a
/// clone for scripting and inspection while the client drives another.
#[derive(Clone)]
pub(crate) struct MockTransport {
    inner: Arc<MockInner>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        MockTransport {
            inner: Arc::new(MockInner {
                frames: Mutex::new(VecDeque::new()),
                notify: Notify::new(),
                connect_failures: AtomicU32::new(0),
                connects: AtomicU32::new(0),
                open: AtomicBool::new(false),
                sent: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Queue a text frame for `recv`.
    pub(crate) fn push_text(&self, text: impl Into<String>) {
        self.inner
            .frames
            .lock()
            .unwrap()
            .push_back(Frame::Text(text.into()));
        self.inner.notify.notify_one();
    }

    /// Queue an orderly close.
    pub(crate) fn push_close(&self) {
        self.inner.frames.lock().unwrap().push_back(Frame::Close);
        self.inner.notify.notify_one();
    }

    /// Queue a transport failure.
    pub(crate) fn push_error(&self, detail: impl Into<String>) {
        self.inner
            .frames
            .lock()
            .unwrap()
            .push_back(Frame::Error(detail.into()));
        self.inner.notify.notify_one();
    }

    /// Make the next `n` connect calls fail.
    pub(crate) fn fail_connects(&self, n: u32) {
        self.inner.connect_failures.store(n, Ordering::SeqCst);
    }

    /// Total connect calls observed.
    pub(crate) fn connects(&self) -> u32 {
        self.inner.connects.load(Ordering::SeqCst)
    }

    /// Whether a connection is currently open.
    pub(crate) fn is_open(&self) -> bool {
        self.inner.open.load(Ordering::SeqCst)
    }

    /// Frames sent through `send`.
    pub(crate) fn sent(&self) -> Vec<String> {
        self.inner.sent.lock().unwrap().clone()
    }
}

impl PushTransport for MockTransport {
    fn connect(
        &mut self,
        _url: &str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = TransportResult<()>> + Send + '_>>
    {
        Box::pin(async move {
            self.inner.connects.fetch_add(1, Ordering::SeqCst);
            let failures = self.inner.connect_failures.load(Ordering::SeqCst);
            if failures > 0 {
                self.inner
                    .connect_failures
                    .store(failures - 1, Ordering::SeqCst);
                Err(TransportError::OpenFailed("mock failure".into()))
            } else {
                self.inner.open.store(true, Ordering::SeqCst);
                Ok(())
            }
        })
    }

    fn disconnect(
        &mut self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = TransportResult<()>> + Send + '_>>
    {
        Box::pin(async move {
            self.inner.open.store(false, Ordering::SeqCst);
            Ok(())
        })
    }

    fn send(
        &mut self,
        text: String,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = TransportResult<()>> + Send + '_>>
    {
        Box::pin(async move {
            if !self.inner.open.load(Ordering::SeqCst) {
                return Err(TransportError::Closed);
            }
            self.inner.sent.lock().unwrap().push(text);
            Ok(())
        })
    }

    fn recv(
        &mut self,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = TransportResult<Option<String>>> + Send + '_>,
    > {
        Box::pin(async move {
            loop {
                let frame = self.inner.frames.lock().unwrap().pop_front();
                match frame {
                    Some(Frame::Text(text)) => return Ok(Some(text)),
                    Some(Frame::Close) => {
                        self.inner.open.store(false, Ordering::SeqCst);
                        return Ok(None);
                    }
                    Some(Frame::Error(detail)) => {
                        self.inner.open.store(false, Ordering::SeqCst);
                        return Err(TransportError::ReceiveFailed(detail));
                    }
                    // Stay pending until a frame is scripted
                    None => self.inner.notify.notified().await,
                }
            }
        })
    }

    fn is_connected(&self) -> bool {
        self.inner.open.load(Ordering::SeqCst)
    }
}

#[tokio::test]
async fn mock_transport_connect_disconnect() {
    let mut transport = MockTransport::new();
    assert!(!transport.is_connected());

    transport.connect("ws://localhost:8000/ws/alerts").await.unwrap();
    assert!(transport.is_connected());
    assert_eq!(transport.connects(), 1);

    transport.disconnect().await.unwrap();
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn mock_transport_scripted_connect_failures() {
    let mut transport = MockTransport::new();
    transport.fail_connects(2);

    assert!(transport.connect("ws://x").await.is_err());
    assert!(transport.connect("ws://x").await.is_err());
    transport.connect("ws://x").await.unwrap();
    assert_eq!(transport.connects(), 3);
}

#[tokio::test]
async fn mock_transport_send_recv() {
    let mut transport = MockTransport::new();
    transport.connect("ws://x").await.unwrap();

    transport.send(r#"{"hello": true}"#.to_string()).await.unwrap();
    assert_eq!(transport.sent(), vec![r#"{"hello": true}"#.to_string()]);

    transport.push_text(r#"{"ready": true}"#);
    let received = transport.recv().await.unwrap();
    assert_eq!(received.as_deref(), Some(r#"{"ready": true}"#));
}

#[tokio::test]
async fn mock_transport_close_and_error_frames() {
    let mut transport = MockTransport::new();
    transport.connect("ws://x").await.unwrap();

    transport.push_close();
    assert!(transport.recv().await.unwrap().is_none());
    assert!(!transport.is_connected());

    transport.connect("ws://x").await.unwrap();
    transport.push_error("reset by peer");
    assert!(matches!(
        transport.recv().await,
        Err(TransportError::ReceiveFailed(_))
    ));
}

#[tokio::test]
async fn mock_transport_send_requires_open_channel() {
    let mut transport = MockTransport::new();
    let result = transport.send("{}".to_string()).await;
    assert!(matches!(result, Err(TransportError::Closed)));
}
