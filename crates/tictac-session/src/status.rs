//! User-facing texts derived from the session state.
//!
//! These are pure functions so the exact wording can be tested without a
//! session or a sink.

use tictac_protocol::{Board, Role};

use crate::Outcome;

/// Shown when the turn belongs to this player.
pub const YOUR_TURN: &str = "It's your turn";
/// Shown when the opponent is on move in a started game.
pub const OPPONENT_TURN: &str = "It's your opponent's turn";
/// Shown to the winner.
pub const YOU_WON: &str = "You WON!";
/// Shown to the loser.
pub const YOU_LOST: &str = "You lost...";
/// Shown to everyone on a draw.
pub const DRAW: &str = "Draw!";

/// Role line shown once, when the server assigns the role.
pub fn role_assigned(role: Role) -> String {
    format!("You are: {role}")
}

/// Role line refreshed with every board snapshot.
pub fn role_playing(role: Role) -> String {
    format!("You play: {role}")
}

/// The turn indicator for `role` given the server's latest snapshot.
///
/// Spectators have no turn and are always told who is on move. A player
/// who is not on move while the board is still the empty sentinel is
/// waiting for an opponent to join: the protocol has no explicit "game
/// started" signal, so the empty board is the only way to tell.
pub fn turn_indicator(role: Role, turn: Role, board: &Board) -> String {
    if !role.is_player() {
        return format!("It's player ({turn})'s turn");
    }
    if turn == role {
        YOUR_TURN.to_string()
    } else if board.is_empty_sentinel() {
        format!("Waiting for player ({turn})...")
    } else {
        OPPONENT_TURN.to_string()
    }
}

/// The result message for a finished game, or `None` while it is ongoing.
///
/// A client that never got a role reads the result as a spectator would.
pub fn outcome_message(role: Option<Role>, outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Draw => Some(DRAW.to_string()),
        Outcome::Won(winner) => Some(match role {
            Some(role) if role == winner => YOU_WON.to_string(),
            Some(role) if role.is_player() => YOU_LOST.to_string(),
            _ => format!("Player {winner} WON!"),
        }),
    }
}
