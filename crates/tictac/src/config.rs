//! Client configuration.

use std::time::Duration;

use tictac_transport::{Endpoint, TransportError, DEFAULT_SOCKET_PATH};
use url::Url;

/// Page URL used when none is configured.
pub const DEFAULT_PAGE_URL: &str = "http://127.0.0.1:8000/";

/// How long the opening handshake may take by default.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the client needs to know before it connects.
///
/// The page URL is the one the game was loaded from. The socket endpoint
/// and the redirect target are both derived from it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// The hosting page. Its scheme decides `ws` vs `wss`.
    pub page_url: Url,

    /// Socket path on the page's host. Default: `/ws`.
    pub socket_path: String,

    /// An explicit socket URL, overriding `socket_path`. Must match the
    /// page's transport security.
    pub socket_url: Option<Url>,

    /// Upper bound on the opening handshake.
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Default settings for the game loaded from `page_url`.
    pub fn for_page(page_url: Url) -> Self {
        Self {
            page_url,
            socket_path: DEFAULT_SOCKET_PATH.to_string(),
            socket_url: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Resolves and validates the socket endpoint.
    ///
    /// # Errors
    /// Scheme problems surface here, before any connection attempt.
    pub fn endpoint(&self) -> Result<Endpoint, TransportError> {
        match &self.socket_url {
            Some(socket) => Endpoint::with_socket(&self.page_url, socket.clone()),
            None => Endpoint::for_page(&self.page_url, &self.socket_path),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // The constant is a valid absolute URL.
        Self::for_page(Url::parse(DEFAULT_PAGE_URL).expect("valid default page url"))
    }
}
