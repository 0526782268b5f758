// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the push channel.
//!
//! Provides a trait-based transport layer that enables:
//! - Real WebSocket connections for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;

use qp_core::Event;

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection closed unexpectedly.
    #[error("connection closed")]
    ConnectionClosed,

    /// Send failed.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// Receive failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(String),

    /// A frame could not be encoded or decoded. The connection is still usable.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TransportError {
    /// Returns true if the connection survived this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TransportError::Serialization(_))
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by [`Transport`] methods.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// Transport trait for WebSocket-like communication.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait Transport: Send {
    /// Connect to a push endpoint.
    fn connect(&mut self, url: &str) -> TransportFuture<'_, ()>;

    /// Disconnect from the server.
    fn disconnect(&mut self) -> TransportFuture<'_, ()>;

    /// Send a JSON message to the server.
    fn send(&mut self, msg: serde_json::Value) -> TransportFuture<'_, ()>;

    /// Receive the next event from the server.
    ///
    /// Returns `None` if the connection is closed.
    fn recv(&mut self) -> TransportFuture<'_, Option<Event>>;

    /// Check if connected.
    fn is_connected(&self) -> bool;
}

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// WebSocket transport implementation using tokio-tungstenite.
pub struct WebSocketTransport {
    /// The WebSocket connection, if connected.
    ws: Option<WebSocketConnection>,
}

/// Internal WebSocket connection wrapper.
struct WebSocketConnection {
    sink: futures_util::stream::SplitSink<WsStream, tokio_tungstenite::tungstenite::Message>,
    stream: futures_util::stream::SplitStream<WsStream>,
}

impl WebSocketTransport {
    /// Create a new WebSocket transport.
    pub fn new() -> Self {
        WebSocketTransport { ws: None }
    }
}

impl Default for WebSocketTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for WebSocketTransport {
    fn connect(&mut self, url: &str) -> TransportFuture<'_, ()> {
        let url = url.to_string();
        Box::pin(async move {
            use futures_util::StreamExt;

            let (ws_stream, _) = tokio_tungstenite::connect_async(url.as_str())
                .await
                .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;

            let (sink, stream) = ws_stream.split();
            self.ws = Some(WebSocketConnection { sink, stream });
            Ok(())
        })
    }

    fn disconnect(&mut self) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            if let Some(mut ws) = self.ws.take() {
                use futures_util::SinkExt;
                let _ = ws.sink.close().await;
            }
            Ok(())
        })
    }

    fn send(&mut self, msg: serde_json::Value) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            use futures_util::SinkExt;
            use tokio_tungstenite::tungstenite::Message;

            let ws = self.ws.as_mut().ok_or(TransportError::ConnectionClosed)?;

            let json = serde_json::to_string(&msg)
                .map_err(|e| TransportError::Serialization(e.to_string()))?;

            if let Err(e) = ws.sink.send(Message::Text(json.into())).await {
                // Connection is broken, clear it
                self.ws = None;
                return Err(TransportError::SendFailed(e.to_string()));
            }

            Ok(())
        })
    }

    fn recv(&mut self) -> TransportFuture<'_, Option<Event>> {
        Box::pin(async move {
            use futures_util::StreamExt;
            use tokio_tungstenite::tungstenite::Message;

            let ws = self.ws.as_mut().ok_or(TransportError::ConnectionClosed)?;

            loop {
                match ws.stream.next().await {
                    Some(Ok(Message::Text(text))) => {
                        // A bad frame is the sender's problem; keep the socket.
                        let event = Event::from_json(text.as_str())
                            .map_err(|e| TransportError::Serialization(e.to_string()))?;
                        if let Some(poll) = event.poll() {
                            poll.validate()
                                .map_err(|e| TransportError::Serialization(e.to_string()))?;
                        }
                        return Ok(Some(event));
                    }
                    Some(Ok(Message::Close(_))) => {
                        self.ws = None;
                        return Ok(None);
                    }
                    Some(Ok(_)) => {
                        // Ping/pong are answered by tungstenite; binary frames are not events.
                        continue;
                    }
                    Some(Err(e)) => {
                        self.ws = None;
                        return Err(TransportError::ReceiveFailed(e.to_string()));
                    }
                    None => {
                        self.ws = None;
                        return Ok(None);
                    }
                }
            }
        })
    }

    fn is_connected(&self) -> bool {
        self.ws.is_some()
    }
}
