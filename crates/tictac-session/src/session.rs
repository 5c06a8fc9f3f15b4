//! The game session: the client's view of one game.
//!
//! A session tracks:
//! - WHO this client is (`Role`, assigned once by the server)
//! - WHAT the board looks like and whose turn it is (the latest snapshot)
//! - HOW the game ended, if it did (`Outcome`)
//!
//! Everything here is mutated by server frames only. Sending a move never
//! touches the board: the server's next snapshot does.

use serde::{Deserialize, Serialize};
use tictac_protocol::{Board, CellIndex, Role, ServerEvent};

use crate::{status, RenderSink, ResultSink, SessionError};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How the game stands.
///
/// ```text
///   Ongoing ──(WIN|r)──→ Won(r)
///      └─────(DRAW)───→ Draw
/// ```
///
/// `Won` and `Draw` are absorbing: nothing leaves them within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won(Role),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Where the session is in its lifecycle.
///
/// ```text
/// AwaitingRole ──(YOU|r)──→ Assigned(r) ──(WIN / DRAW)──→ Terminal(outcome)
///      │                        │                              │
///      └────────────────────(DISC|reason)──────────────────────┴──→ Disconnected
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingRole,
    Assigned(Role),
    Terminal(Outcome),
    Disconnected(String),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingRole => write!(f, "AwaitingRole"),
            Self::Assigned(role) => write!(f, "Assigned({role})"),
            Self::Terminal(outcome) => write!(f, "Terminal({outcome:?})"),
            Self::Disconnected(_) => write!(f, "Disconnected"),
        }
    }
}

/// What the caller should do after a frame was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading frames.
    Continue,
    /// The game ended and the result was submitted.
    Finished(Outcome),
    /// The server ended the session. The caller alerts and redirects.
    Disconnected(String),
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A read-only copy of the session state, for front-ends and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub role: Option<Role>,
    pub board: Board,
    pub turn: Option<Role>,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// GameSession
// ---------------------------------------------------------------------------

/// Owns the client's game state and drives the render and result sinks.
///
/// There is exactly one of these per connection. It is owned by the
/// client's event loop, so inbound frames and clicks never race.
pub struct GameSession<R, S> {
    role: Option<Role>,
    board: Board,
    turn: Option<Role>,
    outcome: Outcome,
    disconnected: Option<String>,
    render: R,
    results: S,
}

impl<R: RenderSink, S: ResultSink> GameSession<R, S> {
    /// A fresh session in `AwaitingRole`.
    pub fn new(render: R, results: S) -> Self {
        Self {
            role: None,
            board: Board::EMPTY,
            turn: None,
            outcome: Outcome::Ongoing,
            disconnected: None,
            render,
            results,
        }
    }

    /// Applies one decoded server frame.
    ///
    /// # Errors
    /// A [`SessionError`] means the frame was ignored and the state is
    /// unchanged. The caller logs it and moves on.
    pub fn handle(&mut self, event: ServerEvent) -> Result<Step, SessionError> {
        match event {
            // A forced disconnect ends the session from any state, once.
            ServerEvent::ForcedDisconnect(reason) if self.disconnected.is_none() => {
                tracing::info!(%reason, "server ended the session");
                self.disconnected = Some(reason.clone());
                Ok(Step::Disconnected(reason))
            }
            other if self.is_over() => {
                Err(SessionError::SessionOver(other.kind()))
            }
            ServerEvent::RoleAssigned(role) => self.assign_role(role),
            ServerEvent::BoardUpdated { board, turn } => {
                self.update_board(board, turn);
                Ok(Step::Continue)
            }
            ServerEvent::GameWon(winner) => {
                Ok(self.finish(Outcome::Won(winner)))
            }
            ServerEvent::GameDrawn => Ok(self.finish(Outcome::Draw)),
            // Unreachable: a repeated disconnect is caught by the
            // `is_over()` arm above. Present for exhaustiveness only.
            ServerEvent::ForcedDisconnect(_) => {
                Err(SessionError::SessionOver("ForcedDisconnect"))
            }
        }
    }

    fn is_over(&self) -> bool {
        self.disconnected.is_some() || self.outcome.is_terminal()
    }

    fn assign_role(&mut self, role: Role) -> Result<Step, SessionError> {
        if let Some(current) = self.role {
            return Err(SessionError::RoleAlreadyAssigned {
                current,
                received: role,
            });
        }

        tracing::info!(%role, "role assigned");
        self.role = Some(role);
        self.render.render_user_role(&status::role_assigned(role));
        Ok(Step::Continue)
    }

    fn update_board(&mut self, board: Board, turn: Role) {
        // Board and turn come from the same frame and are replaced
        // together.
        self.board = board;
        self.turn = Some(turn);
        tracing::debug!(%board, %turn, "board updated");

        // Without a role there is no point of view for the indicator.
        if let Some(role) = self.role {
            self.render
                .render_status(&status::turn_indicator(role, turn, &board));
            self.render.render_user_role(&status::role_playing(role));
        }

        for (index, cell) in board.iter() {
            self.render.render_cell(index, cell);
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        self.outcome = outcome;
        tracing::info!(?outcome, role = ?self.role, "game over");

        if let Some(message) = status::outcome_message(self.role, outcome) {
            self.render.render_status(&message);
            self.results.submit_result(&message);
        }
        Step::Finished(outcome)
    }

    /// Returns `true` if a move may be sent right now: a playing role is
    /// assigned, the game is ongoing, and the server has not disconnected
    /// us.
    pub fn can_move(&self) -> bool {
        self.role.is_some_and(Role::is_player) && !self.is_over()
    }

    /// Passes `index` through if a move may be sent, or drops it.
    ///
    /// Dropping is not an error: it is usually a click that raced the role
    /// assignment. Occupancy and range are not checked, the server is the
    /// only judge of a move.
    pub fn gate_move(&self, index: CellIndex) -> Option<CellIndex> {
        if self.can_move() {
            Some(index)
        } else {
            tracing::debug!(%index, phase = %self.phase(), "move dropped");
            None
        }
    }

    pub fn phase(&self) -> Phase {
        if let Some(reason) = &self.disconnected {
            return Phase::Disconnected(reason.clone());
        }
        match (self.role, self.outcome) {
            (_, outcome) if outcome.is_terminal() => Phase::Terminal(outcome),
            (Some(role), _) => Phase::Assigned(role),
            (None, _) => Phase::AwaitingRole,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Option<Role> {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            role: self.role,
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
        }
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    pub fn result_sink(&self) -> &S {
        &self.results
    }
}
