//! Error types for the protocol layer.
//!
//! Each crate in tictac defines its own error enum. A `ProtocolError`
//! always means "this frame did not match the grammar": the socket and
//! the game state are fine, the frame is simply dropped.

use crate::Role;

/// Errors that can occur while decoding a server frame.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The frame is not valid UTF-8 text.
    #[error("frame is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The frame matches none of the known shapes, or carries the
    /// wrong number of `|`-separated fields.
    #[error("malformed frame: {0:?}")]
    Malformed(String),

    /// A role field holds something other than `X`, `O` or `S`.
    #[error("unknown role symbol: {0:?}")]
    UnknownRole(String),

    /// A board cell holds something other than empty, `X` or `O`.
    #[error("unknown cell symbol: {0:?}")]
    UnknownCell(String),

    /// The board field did not split into exactly nine cells.
    #[error("board must have {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },

    /// A field that must name a playing role (turn owner, winner)
    /// named the spectator role instead.
    #[error("role {0} cannot own a turn or win")]
    NotAPlayer(Role),
}
