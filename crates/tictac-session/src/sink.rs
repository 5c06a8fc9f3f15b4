//! Collaborator traits: where the session's output goes.
//!
//! The session never draws anything itself. It calls into these traits,
//! and the front-end decides what "render" means: DOM nodes, a terminal,
//! or a `Vec` in a test.
//!
//! # Why traits?
//!
//! The same state machine drives a console client, a browser build, or a
//! recording fake in tests, without any change to the session code.

use tictac_protocol::{Cell, CellIndex};
use url::Url;

/// Receives board and status updates.
pub trait RenderSink {
    /// Draws one square. Called nine times per board snapshot, in order.
    fn render_cell(&mut self, index: CellIndex, cell: Cell);

    /// Shows the turn indicator, or the final result message.
    fn render_status(&mut self, text: &str);

    /// Shows which role this client plays.
    fn render_user_role(&mut self, text: &str);
}

/// Hands the final outcome to the leaderboard.
///
/// Called exactly once per game, right after the result message is
/// rendered.
pub trait ResultSink {
    fn submit_result(&mut self, message: &str);
}

/// Handles a server-forced disconnect.
///
/// `alert` runs first with the server's reason, then `navigate` with the
/// application root. Nothing else happens on the session afterwards.
pub trait Navigator {
    fn alert(&mut self, reason: &str);

    fn navigate(&mut self, url: &Url);
}

impl<T: RenderSink + ?Sized> RenderSink for Box<T> {
    fn render_cell(&mut self, index: CellIndex, cell: Cell) {
        (**self).render_cell(index, cell);
    }

    fn render_status(&mut self, text: &str) {
        (**self).render_status(text);
    }

    fn render_user_role(&mut self, text: &str) {
        (**self).render_user_role(text);
    }
}

impl<T: ResultSink + ?Sized> ResultSink for Box<T> {
    fn submit_result(&mut self, message: &str) {
        (**self).submit_result(message);
    }
}

impl<T: Navigator + ?Sized> Navigator for Box<T> {
    fn alert(&mut self, reason: &str) {
        (**self).alert(reason);
    }

    fn navigate(&mut self, url: &Url) {
        (**self).navigate(url);
    }
}
