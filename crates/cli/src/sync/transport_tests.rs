// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the transport module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::transport::{Transport, TransportError, TransportFuture};
use qp_core::{Event, PollId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One scripted result for [`MockTransport::recv`].
#[derive(Debug, Clone)]
pub enum Step {
    /// Deliver an event.
    Event(Event),
    /// Deliver a frame that fails to decode.
    Malformed,
    /// Close the connection from the server side.
    Close,
}

/// Test-side handle for a [`MockTransport`] that has been moved into a client.
#[derive(Clone)]
pub struct MockHandle {
    script: mpsc::UnboundedSender<Step>,
    connects: Arc<AtomicUsize>,
    failing_connects: Arc<AtomicUsize>,
    outgoing: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockHandle {
    /// Queue the next result of recv().
    pub fn push(&self, step: Step) {
        self.script.send(step).unwrap();
    }

    /// Number of successful connects so far.
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Make the next `n` connect attempts fail.
    pub fn fail_next_connects(&self, n: usize) {
        self.failing_connects.store(n, Ordering::SeqCst);
    }

    /// Messages that were sent via send().
    pub fn outgoing(&self) -> Vec<serde_json::Value> {
        self.outgoing.lock().unwrap().clone()
    }
}

/// Mock transport for testing without real sockets.
///
/// recv() waits on the script and never returns while the script is empty,
/// so an idle connection stays idle instead of looking closed.
pub struct MockTransport {
    connected: bool,
    script: mpsc::UnboundedReceiver<Step>,
    connects: Arc<AtomicUsize>,
    failing_connects: Arc<AtomicUsize>,
    outgoing: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockTransport {
    pub fn new() -> (Self, MockHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = MockHandle {
            script: tx,
            connects: Arc::new(AtomicUsize::new(0)),
            failing_connects: Arc::new(AtomicUsize::new(0)),
            outgoing: Arc::new(Mutex::new(Vec::new())),
        };
        let transport = MockTransport {
            connected: false,
            script: rx,
            connects: Arc::clone(&handle.connects),
            failing_connects: Arc::clone(&handle.failing_connects),
            outgoing: Arc::clone(&handle.outgoing),
        };
        (transport, handle)
    }
}

impl Transport for MockTransport {
    fn connect(&mut self, _url: &str) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            let failing = self.failing_connects.load(Ordering::SeqCst);
            if failing > 0 {
                self.failing_connects.store(failing - 1, Ordering::SeqCst);
                return Err(TransportError::ConnectionFailed("mock failure".into()));
            }
            self.connected = true;
            self.connects.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn disconnect(&mut self) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            self.connected = false;
            Ok(())
        })
    }

    fn send(&mut self, msg: serde_json::Value) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            if !self.connected {
                return Err(TransportError::ConnectionClosed);
            }
            self.outgoing.lock().unwrap().push(msg);
            Ok(())
        })
    }

    fn recv(&mut self) -> TransportFuture<'_, Option<Event>> {
        Box::pin(async move {
            match self.script.recv().await {
                Some(Step::Event(event)) => Ok(Some(event)),
                Some(Step::Malformed) => Err(TransportError::Serialization(
                    "expected value at line 1 column 1".into(),
                )),
                Some(Step::Close) => {
                    self.connected = false;
                    Ok(None)
                }
                None => std::future::pending().await,
            }
        })
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[tokio::test]
async fn test_mock_transport_connect() {
    let (mut transport, handle) = MockTransport::new();
    assert!(!transport.is_connected());

    transport.connect("ws://localhost:1234").await.unwrap();
    assert!(transport.is_connected());
    assert_eq!(handle.connects(), 1);

    transport.disconnect().await.unwrap();
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn test_mock_transport_send_recv() {
    let (mut transport, handle) = MockTransport::new();
    transport.connect("ws://localhost:1234").await.unwrap();

    transport
        .send(serde_json::json!({"type": "hello"}))
        .await
        .unwrap();
    assert_eq!(handle.outgoing(), vec![serde_json::json!({"type": "hello"})]);

    handle.push(Step::Event(Event::poll_deleted(PollId(3))));
    let received = transport.recv().await.unwrap();
    assert_eq!(received, Some(Event::poll_deleted(PollId(3))));

    handle.push(Step::Close);
    assert!(transport.recv().await.unwrap().is_none());
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn test_mock_transport_malformed_is_recoverable() {
    let (mut transport, handle) = MockTransport::new();
    transport.connect("ws://localhost:1234").await.unwrap();

    handle.push(Step::Malformed);
    let err = transport.recv().await.unwrap_err();
    assert!(err.is_recoverable());
    assert!(transport.is_connected());
}

#[tokio::test]
async fn test_mock_transport_connect_fail() {
    let (mut transport, handle) = MockTransport::new();
    handle.fail_next_connects(1);

    let result = transport.connect("ws://localhost:1234").await;
    assert!(result.is_err());
    assert!(!transport.is_connected());

    transport.connect("ws://localhost:1234").await.unwrap();
    assert_eq!(handle.connects(), 1);
}

#[tokio::test]
async fn test_websocket_transport_requires_connection() {
    use super::transport::WebSocketTransport;

    let mut transport = WebSocketTransport::new();
    assert!(!transport.is_connected());
    let err = transport.send(serde_json::json!({})).await.unwrap_err();
    assert!(matches!(err, TransportError::ConnectionClosed));
    assert!(!err.is_recoverable());
}

#[tokio::test]
async fn test_websocket_transport_connect_refused() {
    use super::transport::WebSocketTransport;

    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut transport = WebSocketTransport::new();
    let err = transport
        .connect(&format!("ws://{}", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::ConnectionFailed(_)));
}
