// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push channel client.
//!
//! Owns one persistent connection for the lifetime of the client:
//! - A background task holds the transport, reconnects with exponential
//!   backoff, and forwards decoded events in arrival order
//! - Subscribers are called from [`PushClient::next_event`] on the caller's
//!   task, one at a time, in registration order
//! - Outbound messages are fire-and-forget and dropped while disconnected
//!
//! The client is constructed and shut down explicitly by whoever owns it.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use qp_core::Event;

use super::transport::{Transport, WebSocketTransport};

/// Configuration for the push client.
#[derive(Debug, Clone)]
pub struct PushConfig {
    /// URL of the push endpoint.
    pub url: String,
    /// Initial delay for exponential backoff (milliseconds).
    pub initial_delay_ms: u64,
    /// Maximum delay between reconnection attempts (seconds).
    pub max_delay_secs: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        PushConfig {
            url: "ws://localhost:8000/ws".to_string(),
            initial_delay_ms: 100,
            max_delay_secs: 30,
        }
    }
}

/// State of the push connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// First connection attempt in progress.
    Connecting,
    /// Connected to the push endpoint.
    Connected,
    /// Waiting to retry after a failed attempt or a dropped connection.
    Reconnecting { attempt: u32 },
    /// Shut down; no further attempts will be made.
    Disconnected,
}

/// Exponential backoff schedule, doubling up to a ceiling.
#[derive(Debug, Clone)]
pub struct Backoff {
    initial_ms: u64,
    max_ms: u64,
    next_ms: u64,
    attempt: u32,
}

impl Backoff {
    pub fn new(config: &PushConfig) -> Self {
        let max_ms = config.max_delay_secs.saturating_mul(1000).max(1);
        let initial_ms = config.initial_delay_ms.clamp(1, max_ms);
        Backoff {
            initial_ms,
            max_ms,
            next_ms: initial_ms,
            attempt: 0,
        }
    }

    /// Returns the delay before the next attempt and advances the schedule.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.next_ms;
        self.next_ms = std::cmp::min(self.next_ms.saturating_mul(2), self.max_ms);
        self.attempt = self.attempt.saturating_add(1);
        Duration::from_millis(delay)
    }

    /// Number of delays handed out since the last reset.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Starts the schedule over, after a successful connection.
    pub fn reset(&mut self) {
        self.next_ms = self.initial_ms;
        self.attempt = 0;
    }
}

/// Handle returned by [`PushClient::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Event handler registered with a push client.
pub type Handler = Box<dyn FnMut(&Event) + Send>;

/// Ordered registry of event handlers.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler after all existing ones.
    pub fn subscribe(&mut self, handler: impl FnMut(&Event) + Send + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sid, _)| *sid != id);
        self.handlers.len() != before
    }

    /// Calls every handler with the event, in registration order.
    pub fn dispatch(&mut self, event: &Event) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Client side of the push channel.
pub struct PushClient {
    events: mpsc::UnboundedReceiver<Event>,
    outbound: mpsc::UnboundedSender<serde_json::Value>,
    state: watch::Receiver<ConnectionState>,
    shutdown: watch::Sender<bool>,
    subscribers: Subscribers,
    task: JoinHandle<()>,
}

impl PushClient {
    /// Start a push client over a WebSocket transport.
    pub fn connect(config: PushConfig) -> Self {
        Self::spawn(config, WebSocketTransport::new())
    }

    /// Start a push client over a custom transport (for testing).
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T: Transport + 'static>(config: PushConfig, transport: T) -> Self {
        let (events_tx, events) = mpsc::unbounded_channel();
        let (outbound, outbound_rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(ConnectionState::Connecting);
        let (shutdown, shutdown_rx) = watch::channel(false);

        let connection = Connection {
            config,
            transport,
            events: events_tx,
            outbound: outbound_rx,
            state: state_tx,
            shutdown: shutdown_rx,
        };
        let task = tokio::spawn(connection.run());

        PushClient {
            events,
            outbound,
            state,
            shutdown,
            subscribers: Subscribers::new(),
            task,
        }
    }

    /// Register a handler for every future event.
    pub fn subscribe(&mut self, handler: impl FnMut(&Event) + Send + 'static) -> SubscriptionId {
        self.subscribers.subscribe(handler)
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Send a message to the server.
    ///
    /// Best effort: no acknowledgement, no retry, and the message is dropped
    /// if the connection is down when the background task gets to it.
    pub fn send<M: Serialize>(&self, message: &M) {
        let value = match serde_json::to_value(message) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("dropping unserializable push message: {}", e);
                return;
            }
        };
        if self.outbound.send(value).is_err() {
            tracing::debug!("push client stopped, message dropped");
        }
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// A separate handle on the connection state, for watching changes
    /// alongside [`PushClient::next_event`].
    pub fn states(&self) -> watch::Receiver<ConnectionState> {
        self.state.clone()
    }

    /// Wait until the connection state satisfies `f`.
    pub async fn wait_for_state(&mut self, f: impl FnMut(&ConnectionState) -> bool) -> bool {
        self.state.wait_for(f).await.is_ok()
    }

    /// Wait for the next event and hand it to every subscriber.
    ///
    /// Returns `None` once the client has been shut down.
    pub async fn next_event(&mut self) -> Option<Event> {
        let event = self.events.recv().await?;
        self.subscribers.dispatch(&event);
        Some(event)
    }

    /// Stop the background task and close the connection.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            tracing::warn!("push task ended abnormally: {}", e);
        }
    }
}

/// Background half of the push client; owns the transport.
struct Connection<T: Transport> {
    config: PushConfig,
    transport: T,
    events: mpsc::UnboundedSender<Event>,
    outbound: mpsc::UnboundedReceiver<serde_json::Value>,
    state: watch::Sender<ConnectionState>,
    shutdown: watch::Receiver<bool>,
}

/// Why a connected session ended.
enum SessionEnd {
    Lost,
    Shutdown,
}

impl<T: Transport> Connection<T> {
    async fn run(mut self) {
        let mut backoff = Backoff::new(&self.config);

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            let connected = tokio::select! {
                _ = self.shutdown.changed() => break,
                result = self.transport.connect(&self.config.url) => result,
            };

            match connected {
                Ok(()) => {
                    tracing::info!("push channel connected to {}", self.config.url);
                    backoff.reset();
                    self.state.send_replace(ConnectionState::Connected);

                    match self.session().await {
                        SessionEnd::Shutdown => break,
                        SessionEnd::Lost => {
                            tracing::info!("push channel disconnected");
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("push channel connect failed: {}", e);
                }
            }

            let delay = backoff.next_delay();
            self.state.send_replace(ConnectionState::Reconnecting {
                attempt: backoff.attempt(),
            });
            tracing::info!(
                attempt = backoff.attempt(),
                "reconnecting in {}ms",
                delay.as_millis()
            );

            if self.wait_or_shutdown(delay).await {
                break;
            }
            self.drain_outbound();
        }

        let _ = self.transport.disconnect().await;
        self.state.send_replace(ConnectionState::Disconnected);
        tracing::debug!("push task stopped");
    }

    /// Pump a connected transport until it drops or shutdown is requested.
    async fn session(&mut self) -> SessionEnd {
        loop {
            tokio::select! {
                _ = self.shutdown.changed() => {
                    return SessionEnd::Shutdown;
                }

                Some(msg) = self.outbound.recv() => {
                    if let Err(e) = self.transport.send(msg).await {
                        if !e.is_recoverable() {
                            tracing::warn!("push send failed: {}", e);
                            return SessionEnd::Lost;
                        }
                        tracing::warn!("push message dropped: {}", e);
                    }
                }

                result = self.transport.recv() => {
                    match result {
                        Ok(Some(event)) => {
                            tracing::debug!(event = %event.kind(), poll = %event.poll_id(), "push event");
                            if self.events.send(event).is_err() {
                                // Client handle is gone; nobody is listening.
                                return SessionEnd::Shutdown;
                            }
                        }
                        Ok(None) => return SessionEnd::Lost,
                        Err(e) if e.is_recoverable() => {
                            tracing::warn!("dropping malformed push frame: {}", e);
                        }
                        Err(e) => {
                            tracing::warn!("push receive failed: {}", e);
                            return SessionEnd::Lost;
                        }
                    }
                }
            }
        }
    }

    /// Sleep for `delay`. Returns true if shutdown was requested meanwhile.
    async fn wait_or_shutdown(&mut self, delay: Duration) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(delay) => *self.shutdown.borrow(),
            _ = self.shutdown.changed() => true,
        }
    }

    /// Discard messages queued while disconnected.
    fn drain_outbound(&mut self) {
        let mut dropped = 0;
        while self.outbound.try_recv().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            tracing::debug!("dropped {} push messages while disconnected", dropped);
        }
    }
}
