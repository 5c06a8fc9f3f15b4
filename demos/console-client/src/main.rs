//! Terminal front-end for a tictac game server.
//!
//! Connects to the game served from `TICTAC_PAGE_URL` (default
//! `http://127.0.0.1:8000/`), draws the board on stdout and reads moves
//! from stdin, one cell index (0-8) per line. Pass `--json` to print the
//! final snapshot as JSON.

use std::io::{BufRead, Write};

use tictac::prelude::*;
use tictac::DEFAULT_PAGE_URL;
use url::Url;

// ---------------------------------------------------------------------------
// Front-end collaborators
// ---------------------------------------------------------------------------

/// Draws into any writer. The board is printed once its last square
/// arrives, so a snapshot shows up as one grid.
struct Terminal<W> {
    out: W,
    cells: [Cell; 9],
}

impl<W: Write> Terminal<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            cells: [Cell::Empty; 9],
        }
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "terminal write failed");
        }
    }
}

impl<W: Write> RenderSink for Terminal<W> {
    fn render_cell(&mut self, index: CellIndex, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index.0) {
            *slot = cell;
        }
        if index.0 == 8 {
            let grid = format_board(&self.cells);
            self.print(&grid);
        }
    }

    fn render_status(&mut self, text: &str) {
        self.print(&format!("> {text}"));
    }

    fn render_user_role(&mut self, text: &str) {
        self.print(&format!("[{text}]"));
    }
}

/// Stands in for the leaderboard: the result is only printed.
struct Leaderboard;

impl ResultSink for Leaderboard {
    fn submit_result(&mut self, message: &str) {
        tracing::info!(%message, "result submitted");
        println!("result: {message}");
    }
}

/// A terminal cannot navigate, so the redirect target is printed.
struct Browser;

impl Navigator for Browser {
    fn alert(&mut self, reason: &str) {
        eprintln!("!! {reason}");
    }

    fn navigate(&mut self, url: &Url) {
        println!("redirect: {url}");
    }
}

// ---------------------------------------------------------------------------
// Formatting and input
// ---------------------------------------------------------------------------

/// Renders the board as a 3x3 grid. Empty squares show their index so the
/// user knows what to type.
fn format_board(cells: &[Cell; 9]) -> String {
    cells
        .chunks(3)
        .enumerate()
        .map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => format!(" {} ", row * 3 + col),
                    mark => format!(" {mark} "),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Parses one line of input as a cell index.
fn parse_click(line: &str) -> Option<CellIndex> {
    let index = CellIndex(line.trim().parse().ok()?);
    index.is_on_board().then_some(index)
}

fn page_url() -> String {
    std::env::var("TICTAC_PAGE_URL").unwrap_or_else(|_| DEFAULT_PAGE_URL.to_string())
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

type ConsoleClient<W> = Client<Terminal<W>, Leaderboard, Browser>;

fn build<W: Write>(
    config: ClientConfig,
    out: W,
) -> Result<(ConsoleClient<W>, MoveSender), ClientError> {
    ClientBuilder::from_config(config).build(Terminal::new(out), Leaderboard, Browser)
}

/// Feeds stdin lines to the client as clicks.
///
/// Runs on a plain thread: a blocking stdin read must not hold up the
/// runtime's shutdown once the game is over.
fn spawn_input(moves: MoveSender) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_click(&line) {
                Some(index) => moves.click(index),
                None => eprintln!("enter a cell index from 0 to 8"),
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tictac::init_tracing();

    let json = std::env::args().any(|arg| arg == "--json");
    let config = ClientConfig::for_page(Url::parse(&page_url())?);
    eprintln!("joining the game at {}", config.page_url);

    let (client, moves) = build(config, std::io::stdout())?;
    spawn_input(moves);
    let report = client.run().await?;
    eprintln!("session ended: {} ({})", report.phase, report.connection);

    if json {
        println!("{}", serde_json::to_string_pretty(&report.snapshot)?);
    }
    Ok(())
}
