//! Socket endpoint derivation from the hosting page's URL.
//!
//! The game socket always lives on the same host as the page, and must use
//! the same transport security:
//!
//! ```text
//! http://host:port/…   →  ws://host:port/ws
//! https://host:port/…  →  wss://host:port/ws
//! ```
//!
//! A secure page talking to an insecure socket (or the reverse) is a
//! configuration error, reported before any connection attempt.

use std::fmt;

use url::Url;

use crate::TransportError;

/// Default path of the game socket on the page's host.
pub const DEFAULT_SOCKET_PATH: &str = "/ws";

/// Transport security shared by the page and its socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Security {
    /// `http` pages, `ws` sockets.
    Insecure,
    /// `https` pages, `wss` sockets.
    Secure,
}

impl Security {
    /// Classifies a page scheme (`http` / `https`).
    pub fn of_page(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(Self::Insecure),
            "https" => Some(Self::Secure),
            _ => None,
        }
    }

    /// Classifies a socket scheme (`ws` / `wss`).
    pub fn of_socket(scheme: &str) -> Option<Self> {
        match scheme {
            "ws" => Some(Self::Insecure),
            "wss" => Some(Self::Secure),
            _ => None,
        }
    }

    pub fn page_scheme(self) -> &'static str {
        match self {
            Self::Insecure => "http",
            Self::Secure => "https",
        }
    }

    pub fn socket_scheme(self) -> &'static str {
        match self {
            Self::Insecure => "ws",
            Self::Secure => "wss",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insecure => write!(f, "insecure"),
            Self::Secure => write!(f, "secure"),
        }
    }
}

/// A validated socket endpoint plus the page it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    socket: Url,
    root: Url,
    security: Security,
}

impl Endpoint {
    /// Derives the socket endpoint for `page`, at `path` on the same host.
    ///
    /// # Errors
    /// [`TransportError::UnsupportedScheme`] if the page is not `http` or
    /// `https`, [`TransportError::MissingHost`] if it has no host.
    pub fn for_page(page: &Url, path: &str) -> Result<Self, TransportError> {
        let security = page_security(page)?;
        let authority = authority(page)?;
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let socket = Url::parse(&format!(
            "{}://{authority}{path}",
            security.socket_scheme()
        ))?;
        let root = root_of(security, &authority)?;

        Ok(Self {
            socket,
            root,
            security,
        })
    }

    /// Uses an explicitly configured socket URL, checking it against the
    /// page's transport security.
    ///
    /// # Errors
    /// [`TransportError::SchemeMismatch`] if the socket's security differs
    /// from the page's; [`TransportError::UnsupportedScheme`] if either
    /// scheme is unknown.
    pub fn with_socket(page: &Url, socket: Url) -> Result<Self, TransportError> {
        let security = page_security(page)?;
        let socket_security = Security::of_socket(socket.scheme())
            .ok_or_else(|| {
                TransportError::UnsupportedScheme(socket.scheme().to_string())
            })?;

        if socket_security != security {
            return Err(TransportError::SchemeMismatch {
                page: page.scheme().to_string(),
                socket: socket.scheme().to_string(),
            });
        }

        let root = root_of(security, &authority(page)?)?;
        Ok(Self {
            socket,
            root,
            security,
        })
    }

    /// The URL to open the socket on.
    pub fn socket_url(&self) -> &Url {
        &self.socket
    }

    /// The application's root page, on the page's own scheme. Forced
    /// disconnects redirect here.
    pub fn root_url(&self) -> &Url {
        &self.root
    }

    pub fn security(&self) -> Security {
        self.security
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket)
    }
}

fn page_security(page: &Url) -> Result<Security, TransportError> {
    Security::of_page(page.scheme())
        .ok_or_else(|| TransportError::UnsupportedScheme(page.scheme().to_string()))
}

/// `host[:port]` of the page. Default ports are omitted by `url`, so they
/// stay omitted here.
fn authority(page: &Url) -> Result<String, TransportError> {
    let host = page
        .host_str()
        .ok_or_else(|| TransportError::MissingHost(page.to_string()))?;
    Ok(match page.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

fn root_of(security: Security, authority: &str) -> Result<Url, TransportError> {
    Ok(Url::parse(&format!("{}://{authority}/", security.page_scheme()))?)
}
