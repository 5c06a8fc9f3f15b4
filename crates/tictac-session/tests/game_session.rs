//! Integration tests for the game session, driven by wire frames.

use tictac_protocol::{Board, Cell, CellIndex, Codec, LineCodec, Role};
use tictac_session::{
    status, GameSession, Outcome, Phase, RenderSink, ResultSink, SessionError,
    Step,
};

// =========================================================================
// Recording sinks
// =========================================================================

#[derive(Debug, Default)]
struct Screen {
    cells: [Cell; 9],
    cell_calls: usize,
    statuses: Vec<String>,
    role_lines: Vec<String>,
}

impl RenderSink for Screen {
    fn render_cell(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index.0] = cell;
        self.cell_calls += 1;
    }

    fn render_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn render_user_role(&mut self, text: &str) {
        self.role_lines.push(text.to_string());
    }
}

#[derive(Debug, Default)]
struct Leaderboard {
    submitted: Vec<String>,
}

impl ResultSink for Leaderboard {
    fn submit_result(&mut self, message: &str) {
        self.submitted.push(message.to_string());
    }
}

type Session = GameSession<Screen, Leaderboard>;

fn session() -> Session {
    GameSession::new(Screen::default(), Leaderboard::default())
}

fn feed(s: &mut Session, frame: &str) -> Result<Step, SessionError> {
    let event = LineCodec.decode(frame.as_bytes()).expect("valid frame");
    s.handle(event)
}

fn feed_all(s: &mut Session, frames: &[&str]) {
    for frame in frames {
        feed(s, frame).unwrap();
    }
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_player_x_wins() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", ",,,,,,,,|X", "X,,,,,,,,|O"]);
    assert_eq!(feed(&mut s, "WIN|X").unwrap(), Step::Finished(Outcome::Won(Role::X)));

    let screen = s.render_sink();
    assert_eq!(screen.role_lines[0], "You are: X");
    assert_eq!(
        screen.statuses,
        vec![status::YOUR_TURN, status::OPPONENT_TURN, status::YOU_WON]
    );
    assert_eq!(s.result_sink().submitted, vec![status::YOU_WON]);
}

#[test]
fn test_spectator_sees_draw_and_never_moves() {
    let mut s = session();
    feed(&mut s, "YOU|S").unwrap();
    assert!(!s.can_move());
    feed(&mut s, ",,,,,,,,|X").unwrap();
    assert!(s.gate_move(CellIndex(4)).is_none());
    feed(&mut s, "DRAW").unwrap();
    assert!(s.gate_move(CellIndex(4)).is_none());

    assert_eq!(
        s.render_sink().statuses,
        vec!["It's player (X)'s turn", status::DRAW]
    );
    assert_eq!(s.result_sink().submitted, vec![status::DRAW]);
}

#[test]
fn test_player_o_loses() {
    let mut s = session();
    feed_all(&mut s, &["YOU|O", ",,,,,,,,|X", "X,,,,,,,,|O", "X,O,,,,,,,|X"]);
    feed(&mut s, "WIN|X").unwrap();

    assert_eq!(
        s.render_sink().statuses,
        vec![
            "Waiting for player (X)...",
            status::YOUR_TURN,
            status::OPPONENT_TURN,
            status::YOU_LOST,
        ]
    );
}

// =========================================================================
// Role assignment
// =========================================================================

#[test]
fn test_second_role_assignment_is_flagged() {
    let mut s = session();
    feed(&mut s, "YOU|X").unwrap();

    let err = feed(&mut s, "YOU|O").unwrap_err();
    assert!(matches!(
        err,
        SessionError::RoleAlreadyAssigned {
            current: Role::X,
            received: Role::O,
        }
    ));
    assert_eq!(s.role(), Some(Role::X));
    assert_eq!(s.render_sink().role_lines, vec!["You are: X"]);
}

#[test]
fn test_board_refreshes_role_line() {
    let mut s = session();
    feed_all(&mut s, &["YOU|O", ",,,,,,,,|X"]);
    assert_eq!(
        s.render_sink().role_lines,
        vec!["You are: O", "You play: O"]
    );
}

// =========================================================================
// Board snapshots
// =========================================================================

#[test]
fn test_each_snapshot_overwrites_the_last() {
    let mut s = session();
    feed(&mut s, "YOU|X").unwrap();

    let frames = ["X,,,,,,,,|O", "X,,,,O,,,,|X", ",,,,,,,,|X", "O,X,O,X,O,X,,,|X"];
    for frame in frames {
        feed(&mut s, frame).unwrap();
        let expected: Board = frame.split('|').next().unwrap().parse().unwrap();
        assert_eq!(s.render_sink().cells, *expected.cells(), "after {frame}");
        assert_eq!(s.board(), &expected);
    }
    assert_eq!(s.render_sink().cell_calls, 9 * frames.len());
}

#[test]
fn test_board_and_turn_come_from_the_same_frame() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", "X,,,,,,,,|O", ",O,,,,,,,|X"]);
    assert_eq!(s.turn(), Some(Role::X));
    assert_eq!(s.board().cells()[0], Cell::Empty);
    assert_eq!(s.board().cells()[1], Cell::O);
}

#[test]
fn test_board_before_role_renders_cells_without_status() {
    let mut s = session();
    feed(&mut s, "X,,,,,,,,|O").unwrap();
    assert_eq!(s.render_sink().cells[0], Cell::X);
    assert!(s.render_sink().statuses.is_empty());
    assert!(s.render_sink().role_lines.is_empty());
}

// =========================================================================
// Turn indicator
// =========================================================================

#[test]
fn test_your_turn_regardless_of_board() {
    for board in [",,,,,,,,", "X,O,,,,,,,", "X,O,X,O,X,O,,,"] {
        let mut s = session();
        let frame = format!("{board}|X");
        feed_all(&mut s, &["YOU|X", frame.as_str()]);
        assert_eq!(s.render_sink().statuses, vec![status::YOUR_TURN]);
    }
}

#[test]
fn test_waiting_only_on_sentinel_board() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", ",,,,,,,,|O", ",,,,X,,,,|O"]);
    assert_eq!(
        s.render_sink().statuses,
        vec!["Waiting for player (O)...", status::OPPONENT_TURN]
    );
}

// =========================================================================
// Terminal state
// =========================================================================

#[test]
fn test_no_moves_after_win() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", ",,,,,,,,|X"]);
    assert_eq!(s.gate_move(CellIndex(0)), Some(CellIndex(0)));

    feed(&mut s, "WIN|O").unwrap();
    assert!(!s.can_move());
    assert_eq!(s.gate_move(CellIndex(0)), None);
}

#[test]
fn test_no_board_updates_after_draw() {
    let mut s = session();
    feed_all(&mut s, &["YOU|O", "X,O,X,X,O,X,O,X,O|X", "DRAW"]);
    let before = *s.board();

    let err = feed(&mut s, ",,,,,,,,|X").unwrap_err();
    assert!(matches!(err, SessionError::SessionOver("BoardUpdated")));
    assert_eq!(s.board(), &before);
    assert_eq!(s.result_sink().submitted.len(), 1);
}

#[test]
fn test_result_submitted_once() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", "WIN|X"]);
    assert!(feed(&mut s, "WIN|X").is_err());
    assert!(feed(&mut s, "DRAW").is_err());
    assert_eq!(s.result_sink().submitted, vec![status::YOU_WON]);
}

// =========================================================================
// Moves
// =========================================================================

#[test]
fn test_move_before_role_is_dropped() {
    let s = session();
    assert_eq!(s.gate_move(CellIndex(3)), None);
}

#[test]
fn test_move_is_relayed_without_touching_board() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", "X,,,,,,,,|O"]);

    // Occupied, out of range, not our turn: still the server's call.
    assert_eq!(s.gate_move(CellIndex(0)), Some(CellIndex(0)));
    assert_eq!(s.gate_move(CellIndex(42)), Some(CellIndex(42)));
    assert_eq!(s.board().cells()[0], Cell::X);
    assert!(s.board().cells()[1..].iter().all(|c| c.is_empty()));
}

// =========================================================================
// Forced disconnect
// =========================================================================

#[test]
fn test_disconnect_from_awaiting_role() {
    let mut s = session();
    assert_eq!(
        feed(&mut s, "DISC|Server restarting").unwrap(),
        Step::Disconnected("Server restarting".into())
    );
    assert!(feed(&mut s, "YOU|X").is_err());
    assert_eq!(s.role(), None);
}

#[test]
fn test_disconnect_mid_game_blocks_moves() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", ",,,,,,,,|X"]);
    assert!(s.can_move());
    feed(&mut s, "DISC|opponent left").unwrap();
    assert!(!s.can_move());
    assert!(s.result_sink().submitted.is_empty());
}

#[test]
fn test_second_disconnect_is_ignored() {
    let mut s = session();
    feed(&mut s, "YOU|O").unwrap();
    assert_eq!(
        feed(&mut s, "DISC|Server restarting").unwrap(),
        Step::Disconnected("Server restarting".into())
    );
    assert!(matches!(
        feed(&mut s, "DISC|again"),
        Err(SessionError::SessionOver("ForcedDisconnect"))
    ));
    assert_eq!(s.phase(), Phase::Disconnected("Server restarting".into()));
}

#[test]
fn test_disconnect_after_outcome_still_ends_session() {
    let mut s = session();
    feed_all(&mut s, &["YOU|X", "DRAW"]);
    assert_eq!(
        feed(&mut s, "DISC|bye").unwrap(),
        Step::Disconnected("bye".into())
    );
}
