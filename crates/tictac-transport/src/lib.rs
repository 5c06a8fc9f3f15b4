//! Transport layer for tictac.
//!
//! Provides the [`Connection`] trait the client loop talks to, the
//! [`Endpoint`] rules that pick `ws://` or `wss://` from the hosting page,
//! and the [`ConnectionState`] the client reports.
//!
//! # Feature Flags
//!
//! - `websocket` (default): WebSocket client via `tokio-tungstenite`
//! - `tls`: `wss://` sockets via rustls (ring provider, webpki roots).
//!   Without it a secure endpoint fails with
//!   [`TransportError::TlsUnavailable`].

#![allow(async_fn_in_trait)]

mod endpoint;
mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use endpoint::{Endpoint, Security, DEFAULT_SOCKET_PATH};
pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::WebSocketConnection;

use std::fmt;

/// Opaque identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Creates a new `ConnectionId` from a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Lifecycle of the client's one connection.
///
/// ```text
/// Connecting ──(handshake ok)──→ Open ──(close / DISC / game over)──→ Closed
///      └───────────(connect error)──────────────────────────────────→ Closed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    /// Closed, with a human-readable reason.
    Closed(String),
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connecting => write!(f, "Connecting"),
            Self::Open => write!(f, "Open"),
            Self::Closed(reason) => write!(f, "Closed({reason})"),
        }
    }
}

/// A single connection that can send text frames and receive frames.
pub trait Connection: Send + Sync + 'static {
    /// The error type for connection operations.
    type Error: std::error::Error + Send + Sync;

    /// Sends one text frame to the server.
    async fn send(&self, frame: &str) -> Result<(), Self::Error>;

    /// Receives the next frame from the server, text or binary, as bytes.
    ///
    /// Returns `Ok(None)` when the connection is cleanly closed.
    async fn recv(&self) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Closes the connection.
    async fn close(&self) -> Result<(), Self::Error>;

    /// Returns the unique identifier for this connection.
    fn id(&self) -> ConnectionId;
}
