use std::time::Duration;

/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A page or socket URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The page URL has no host to derive the socket endpoint from.
    #[error("url has no host: {0}")]
    MissingHost(String),

    /// The URL scheme is not one the client knows how to serve.
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// The socket scheme does not match the page's transport security.
    /// Never downgraded: the connection is not attempted.
    #[error("socket scheme {socket:?} does not match page scheme {page:?}")]
    SchemeMismatch { page: String, socket: String },

    /// Opening the connection failed.
    #[error("connect failed: {0}")]
    ConnectFailed(#[source] std::io::Error),

    /// The opening handshake did not finish in time.
    #[error("connect timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// A `wss://` endpoint, but the crate was built without `tls`.
    #[error("{0} needs TLS, enable the `tls` feature")]
    TlsUnavailable(String),

    /// Sending data failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),
}
