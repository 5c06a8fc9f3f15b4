//! Wire protocol for tictac.
//!
//! This crate defines the "language" the game server and the client
//! speak:
//!
//! - **Types** ([`Role`], [`Cell`], [`Board`], [`CellIndex`]): the values
//!   carried inside frames.
//! - **Events** ([`ServerEvent`]): one variant per server frame shape.
//! - **Codec** ([`Codec`] trait, [`LineCodec`]): how frames are turned
//!   into events and moves into frames.
//! - **Errors** ([`ProtocolError`]): what can be wrong with a frame.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw frames) and the game
//! session (role, turn, board). It doesn't know about sockets or
//! rendering. It only knows the grammar.
//!
//! ```text
//! Transport (frames) → Protocol (ServerEvent) → Session (game state)
//! ```

mod codec;
mod error;
mod event;
mod types;

pub use codec::{Codec, LineCodec};
pub use error::ProtocolError;
pub use event::{
    ServerEvent, DISCONNECT_PREFIX, DRAW_FRAME, ROLE_PREFIX, WIN_PREFIX,
};
pub use types::{
    Board, Cell, CellIndex, Role, BOARD_CELLS, CELL_SEPARATOR, DELIMITER,
};
