//! Server frames, decoded into a tagged enum.
//!
//! The server speaks five frame shapes. Instead of checking string
//! prefixes at every call site, each frame is parsed once into a
//! [`ServerEvent`] variant and the rest of the client matches on that.
//! Adding a sixth frame kind means adding a variant, and the compiler then
//! points at every `match` that has to handle it.
//!
//! ```text
//! YOU|<role>           → RoleAssigned
//! DISC|<reason>        → ForcedDisconnect
//! WIN|<role>           → GameWon
//! DRAW                 → GameDrawn
//! <c0,…,c8>|<turn>     → BoardUpdated
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{Board, ProtocolError, Role, DELIMITER};

/// Prefix of the role assignment frame.
pub const ROLE_PREFIX: &str = "YOU";
/// Prefix of the forced disconnect frame.
pub const DISCONNECT_PREFIX: &str = "DISC";
/// Prefix of the winner frame.
pub const WIN_PREFIX: &str = "WIN";
/// The draw frame. It carries no payload and must match exactly.
pub const DRAW_FRAME: &str = "DRAW";

/// One decoded server frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// `YOU|<role>`: the server tells this connection who it is.
    RoleAssigned(Role),

    /// `DISC|<reason>`: the server is ending this session. The reason is
    /// human-readable and meant to be shown to the user.
    ForcedDisconnect(String),

    /// `WIN|<role>`: the game ended and `role` won. Always `X` or `O`.
    GameWon(Role),

    /// `DRAW`: the game ended with a full board and no winner.
    GameDrawn,

    /// `<board>|<turn>`: a complete snapshot. `turn` is always a playing
    /// role.
    BoardUpdated { board: Board, turn: Role },
}

impl ServerEvent {
    /// Short name of the variant, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RoleAssigned(_) => "RoleAssigned",
            Self::ForcedDisconnect(_) => "ForcedDisconnect",
            Self::GameWon(_) => "GameWon",
            Self::GameDrawn => "GameDrawn",
            Self::BoardUpdated { .. } => "BoardUpdated",
        }
    }
}

/// Parses a field that must be the last one in the frame.
fn last_field<'a>(frame: &str, rest: &'a str) -> Result<&'a str, ProtocolError> {
    if rest.contains(DELIMITER) {
        return Err(ProtocolError::Malformed(frame.to_string()));
    }
    Ok(rest)
}

/// Parses a role field that must name `X` or `O`.
fn player_field(frame: &str, rest: &str) -> Result<Role, ProtocolError> {
    let role: Role = last_field(frame, rest)?.parse()?;
    if !role.is_player() {
        return Err(ProtocolError::NotAPlayer(role));
    }
    Ok(role)
}

impl FromStr for ServerEvent {
    type Err = ProtocolError;

    fn from_str(frame: &str) -> Result<Self, Self::Err> {
        if frame == DRAW_FRAME {
            return Ok(Self::GameDrawn);
        }

        let Some((head, rest)) = frame.split_once(DELIMITER) else {
            return Err(ProtocolError::Malformed(frame.to_string()));
        };

        match head {
            ROLE_PREFIX => {
                Ok(Self::RoleAssigned(last_field(frame, rest)?.parse()?))
            }
            // The reason is free text: everything after the first `|`.
            DISCONNECT_PREFIX => Ok(Self::ForcedDisconnect(rest.to_string())),
            WIN_PREFIX => Ok(Self::GameWon(player_field(frame, rest)?)),
            _ => {
                let board: Board = head.parse()?;
                let turn = player_field(frame, rest)?;
                Ok(Self::BoardUpdated { board, turn })
            }
        }
    }
}

/// Prints the event in its wire form.
impl fmt::Display for ServerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoleAssigned(role) => {
                write!(f, "{ROLE_PREFIX}{DELIMITER}{role}")
            }
            Self::ForcedDisconnect(reason) => {
                write!(f, "{DISCONNECT_PREFIX}{DELIMITER}{reason}")
            }
            Self::GameWon(role) => write!(f, "{WIN_PREFIX}{DELIMITER}{role}"),
            Self::GameDrawn => f.write_str(DRAW_FRAME),
            Self::BoardUpdated { board, turn } => {
                write!(f, "{board}{DELIMITER}{turn}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn parse(frame: &str) -> Result<ServerEvent, ProtocolError> {
        frame.parse()
    }

    // =====================================================================
    // The five shapes
    // =====================================================================

    #[test]
    fn test_role_assignment() {
        assert_eq!(parse("YOU|X").unwrap(), ServerEvent::RoleAssigned(Role::X));
        assert_eq!(
            parse("YOU|S").unwrap(),
            ServerEvent::RoleAssigned(Role::Spectator)
        );
    }

    #[test]
    fn test_forced_disconnect_keeps_reason_text() {
        assert_eq!(
            parse("DISC|Server restarting").unwrap(),
            ServerEvent::ForcedDisconnect("Server restarting".into())
        );
        assert_eq!(
            parse("DISC|").unwrap(),
            ServerEvent::ForcedDisconnect(String::new())
        );
    }

    #[test]
    fn test_win() {
        assert_eq!(parse("WIN|O").unwrap(), ServerEvent::GameWon(Role::O));
    }

    #[test]
    fn test_win_by_spectator_is_rejected() {
        let err = parse("WIN|S").unwrap_err();
        assert!(matches!(err, ProtocolError::NotAPlayer(Role::Spectator)));
    }

    #[test]
    fn test_draw_is_exact_literal() {
        assert_eq!(parse("DRAW").unwrap(), ServerEvent::GameDrawn);
        assert!(parse("DRAW|X").is_err());
        assert!(parse("draw").is_err());
    }

    #[test]
    fn test_board_update() {
        let event = parse("X,,,,,,,,|O").unwrap();
        let ServerEvent::BoardUpdated { board, turn } = event else {
            panic!("expected BoardUpdated, got {event:?}");
        };
        assert_eq!(turn, Role::O);
        assert_eq!(board.cells()[0], Cell::X);
        assert!(board.cells()[1..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_empty_board_update() {
        let event = parse(",,,,,,,,|X").unwrap();
        assert!(matches!(
            event,
            ServerEvent::BoardUpdated { board, turn: Role::X }
                if board.is_empty_sentinel()
        ));
    }

    // =====================================================================
    // Protocol violations
    // =====================================================================

    #[test]
    fn test_frame_without_delimiter_is_malformed() {
        assert!(matches!(parse("hello"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(parse(""), Err(ProtocolError::Malformed(_))));
        assert!(matches!(parse("YOU"), Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn test_extra_fields_are_malformed() {
        assert!(matches!(parse("YOU|X|O"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(
            parse(",,,,,,,,|X|O"),
            Err(ProtocolError::Malformed(_))
        ));
    }

    #[test]
    fn test_board_with_spectator_turn_is_rejected() {
        let err = parse(",,,,,,,,|S").unwrap_err();
        assert!(matches!(err, ProtocolError::NotAPlayer(Role::Spectator)));
    }

    #[test]
    fn test_short_board_is_rejected() {
        let err = parse("X,O|X").unwrap_err();
        assert!(matches!(err, ProtocolError::CellCount { found: 2, .. }));
    }

    #[test]
    fn test_unknown_prefix_falls_to_board_and_fails() {
        let err = parse("HELLO|X").unwrap_err();
        assert!(matches!(err, ProtocolError::CellCount { found: 1, .. }));
    }

    // =====================================================================
    // Display
    // =====================================================================

    #[test]
    fn test_display_reproduces_wire_text() {
        for frame in ["YOU|O", "DISC|bye", "WIN|X", "DRAW", "X,O,,,,,,,|X"] {
            assert_eq!(parse(frame).unwrap().to_string(), frame);
        }
    }

    #[test]
    fn test_kind_names_the_variant() {
        assert_eq!(ServerEvent::GameDrawn.kind(), "GameDrawn");
        assert_eq!(ServerEvent::GameWon(Role::X).kind(), "GameWon");
        assert_eq!(
            ServerEvent::ForcedDisconnect("bye".into()).kind(),
            "ForcedDisconnect"
        );
    }
}
