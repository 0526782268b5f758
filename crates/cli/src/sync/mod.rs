// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push channel for live poll updates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ PushClient  │◄────│ Connection  │◄────│  Transport  │◄──── server
//! │ (handlers)  │────►│   (task)    │────►│   (trait)   │────►
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Features
//!
//! - One WebSocket connection per client, owned by a background task
//! - Automatic reconnect with exponential backoff
//! - Malformed frames are logged and skipped without dropping the socket
//! - Injectable transport trait for testing

mod push;
mod transport;

pub use push::{Backoff, ConnectionState, PushClient, PushConfig, SubscriptionId};
pub use transport::{Transport, TransportError, WebSocketTransport};


#[cfg(test)]
pub(crate) mod transport_tests;
