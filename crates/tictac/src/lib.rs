//! # tictac
//!
//! WebSocket client for a server-authoritative tic-tac-toe game.
//!
//! The server decides everything: who plays which mark, whose turn it is,
//! what the board looks like, who won. The client decodes the server's
//! frames, keeps the latest snapshot, tells the front-end what to draw,
//! and relays the user's clicks as moves when it is allowed to.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tictac::prelude::*;
//!
//! # struct Screen;
//! # impl RenderSink for Screen {
//! #     fn render_cell(&mut self, _: CellIndex, _: Cell) {}
//! #     fn render_status(&mut self, _: &str) {}
//! #     fn render_user_role(&mut self, _: &str) {}
//! # }
//! # struct Scores;
//! # impl ResultSink for Scores { fn submit_result(&mut self, _: &str) {} }
//! # struct Browser;
//! # impl Navigator for Browser {
//! #     fn alert(&mut self, _: &str) {}
//! #     fn navigate(&mut self, _: &url::Url) {}
//! # }
//! # async fn play() -> Result<(), ClientError> {
//! let (client, moves) = ClientBuilder::new()
//!     .page("http://127.0.0.1:8000/")?
//!     .build(Screen, Scores, Browser)?;
//! moves.click(CellIndex(4));
//! let report = client.run().await?;
//! println!("{:?}", report.snapshot.outcome);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod handler;

pub use client::{Client, ClientBuilder, MoveSender, SessionReport};
pub use config::{ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_PAGE_URL};
pub use error::ClientError;

pub use tictac_protocol as protocol;
pub use tictac_session as session;
pub use tictac_transport as transport;

/// Installs a `tracing` subscriber that honours `RUST_LOG`, defaulting to
/// `info`. Calling it twice is harmless.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Everything a front-end needs in one import.
pub mod prelude {
    pub use crate::{
        Client, ClientBuilder, ClientConfig, ClientError, MoveSender,
        SessionReport,
    };
    pub use tictac_protocol::{Board, Cell, CellIndex, Role, ServerEvent};
    pub use tictac_session::{
        status, GameSession, Navigator, Outcome, Phase, RenderSink,
        ResultSink, Snapshot,
    };
    pub use tictac_transport::{ConnectionState, Endpoint, Security};
}
