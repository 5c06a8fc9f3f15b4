//! Codec trait and the line codec.
//!
//! The client loop only sees [`Codec`]. The delimiter-joined text format
//! of the game server lives in [`LineCodec`] and nowhere else.

use crate::{CellIndex, ProtocolError, ServerEvent};

/// Turns inbound frames into [`ServerEvent`]s and outbound moves into
/// frame text.
///
/// `Send + Sync + 'static` because the codec is owned by the client's
/// event loop task, which Tokio may move between threads.
pub trait Codec: Send + Sync + 'static {
    /// Decodes one inbound frame.
    ///
    /// # Errors
    /// Returns a [`ProtocolError`] if the bytes are not UTF-8 or do not
    /// match any known frame shape. The caller drops the frame and keeps
    /// going.
    fn decode(&self, frame: &[u8]) -> Result<ServerEvent, ProtocolError>;

    /// Encodes a move for the server.
    fn encode_move(&self, index: CellIndex) -> String;
}

/// The `|`-delimited text codec spoken by the game server.
///
/// ```rust
/// use tictac_protocol::{Codec, CellIndex, LineCodec, Role, ServerEvent};
///
/// let codec = LineCodec;
/// let event = codec.decode(b"YOU|X").unwrap();
/// assert_eq!(event, ServerEvent::RoleAssigned(Role::X));
/// assert_eq!(codec.encode_move(CellIndex(4)), "4");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodec;

impl Codec for LineCodec {
    fn decode(&self, frame: &[u8]) -> Result<ServerEvent, ProtocolError> {
        let text = std::str::from_utf8(frame)?;
        // One message per frame. A trailing line ending is framing, not
        // payload.
        text.trim_end_matches(['\r', '\n']).parse()
    }

    fn encode_move(&self, index: CellIndex) -> String {
        index.to_string()
    }
}
