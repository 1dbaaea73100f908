//! Match detection - maximal same-symbol runs along rows and columns
//!
//! A match is a run of three or more identical symbols. Rows and columns are
//! scanned independently; a long run is emitted once at its full length,
//! never split into shorter pieces. Enumeration order is deterministic:
//! horizontal matches in row-major order first, then vertical matches in
//! column-major order, so the same board always yields the same list.

use tui_match3_types::{Direction, Symbol, MIN_MATCH_LEN};

use crate::board::Board;

/// One maximal matched run: direction, anchor (first cell in reading order)
/// and length (always >= 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
    pub length: usize,
}

impl Match {
    /// Iterate the (row, col) cells covered by this run
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.direction {
            Direction::Horizontal => (self.row, self.col + i),
            Direction::Vertical => (self.row + i, self.col),
        })
    }
}

/// Find every maximal run of length >= 3 on the board.
///
/// An empty or fully-empty board yields no matches.
pub fn find_matches(board: &Board) -> Vec<Match> {
    let size = board.size();
    let mut matches = Vec::new();

    for row in 0..size {
        scan_line(
            size,
            |i| board.get(row, i).flatten(),
            |start, length| {
                matches.push(Match {
                    direction: Direction::Horizontal,
                    row,
                    col: start,
                    length,
                });
            },
        );
    }

    for col in 0..size {
        scan_line(
            size,
            |i| board.get(i, col).flatten(),
            |start, length| {
                matches.push(Match {
                    direction: Direction::Vertical,
                    row: start,
                    col,
                    length,
                });
            },
        );
    }

    matches
}

/// Scan one line of cells, emitting every run that reaches the match floor.
///
/// Tracks a run-start index; a run terminates on a symbol change, on an
/// empty cell, or at the end of the line. Runs never start at an empty cell -
/// the start simply advances past them.
fn scan_line(
    len: usize,
    cell_at: impl Fn(usize) -> Option<Symbol>,
    mut emit: impl FnMut(usize, usize),
) {
    let mut emit_if_valid = |start: usize, length: usize| {
        if length >= MIN_MATCH_LEN {
            emit(start, length);
        }
    };

    let mut start = 0;
    for i in 1..len {
        let anchor = match cell_at(start) {
            Some(sym) => sym,
            None => {
                start = i;
                continue;
            }
        };

        match cell_at(i) {
            None => {
                emit_if_valid(start, i - start);
                start = i + 1;
            }
            Some(sym) if sym != anchor => {
                emit_if_valid(start, i - start);
                start = i;
            }
            Some(_) if i == len - 1 => {
                emit_if_valid(start, i - start + 1);
            }
            Some(_) => {}
        }
    }
}
