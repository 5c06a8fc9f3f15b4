//! Unified error type for the tictac client.

use tictac_protocol::ProtocolError;
use tictac_session::SessionError;
use tictac_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `tictac` crate, you deal with this single error type
/// instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
///
/// Only `Transport` ever ends a client run. Protocol and session errors
/// are per-frame: the loop logs them and reads the next frame.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A transport-level error (bad endpoint, connect, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A frame that does not match the wire grammar.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A frame that makes no sense in the current session state.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::Transport(TransportError::InvalidUrl(err))
    }
}
