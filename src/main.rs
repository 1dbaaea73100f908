//! Terminal match-3 runner (default binary).
//!
//! A plain prompt loop: draw the board, read a swap, resolve cascades,
//! repeat. Malformed input is reported and re-prompted; `q` quits.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_match3::core::{create_game, SimpleRng};
use tui_match3::term::{encode_board_into, parse_move, MoveCommand};
use tui_match3::types::{Symbol, DEFAULT_BOARD_SIZE};

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);
    let mut rng = SimpleRng::new(seed);

    let mut state = create_game(DEFAULT_BOARD_SIZE, &Symbol::ALL, &mut rng);
    // A freshly rolled board may already contain matches; settle it before
    // the first move so the player always starts from a stable grid.
    state = state.resolve_cascades(&Symbol::ALL, &mut rng);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut frame = Vec::with_capacity(4 * 1024);
    let mut lines = stdin.lock().lines();

    loop {
        frame.clear();
        encode_board_into(&mut frame, state.board(), state.score())?;
        stdout.write_all(&frame)?;
        write!(stdout, "> ")?;
        stdout.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()), // stdin closed
        };

        match parse_move(&line, state.board().size()) {
            Ok(MoveCommand::Quit) => return Ok(()),
            Ok(MoveCommand::Swap { from, to }) => {
                state = state.apply_swap(from, to)?;
                state = state.resolve_cascades(&Symbol::ALL, &mut rng);
            }
            Err(err) => {
                writeln!(stdout, "{}", err)?;
            }
        }
    }
}
