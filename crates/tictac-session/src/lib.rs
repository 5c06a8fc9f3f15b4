//! Client-side game state for tictac.
//!
//! This crate is the state machine between decoded frames and whatever
//! draws the game:
//!
//! 1. **State**: role, board, turn and outcome ([`GameSession`])
//! 2. **Texts**: turn indicator and result messages ([`status`])
//! 3. **Collaborators**: where output goes ([`RenderSink`],
//!    [`ResultSink`], [`Navigator`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Front-end (above)  ← implements the sink traits
//!     ↕
//! Session Layer (this crate)  ← applies ServerEvents, gates moves
//!     ↕
//! Protocol Layer (below)  ← provides Role, Board, ServerEvent
//! ```

mod error;
mod session;
mod sink;
pub mod status;

pub use error::SessionError;
pub use session::{GameSession, Outcome, Phase, Snapshot, Step};
pub use sink::{Navigator, RenderSink, ResultSink};
