//! Error types for the session layer.

use tictac_protocol::Role;

/// Frames that decoded fine but make no sense in the current session
/// state.
///
/// None of these are fatal. The client logs them and keeps processing;
/// the session state is left exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The server sent a second `YOU|…` frame. The first role stays.
    #[error("role already assigned as {current}, ignoring {received}")]
    RoleAlreadyAssigned { current: Role, received: Role },

    /// A frame arrived after the game ended or the server disconnected
    /// us. Carries the event kind for logging.
    #[error("session is over, ignoring {0}")]
    SessionOver(&'static str),
}
