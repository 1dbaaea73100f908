//! Game state and the cascade loop
//!
//! `GameState` pairs a board with an accumulated score and is treated as an
//! immutable value: every mechanic returns a new state and leaves its input
//! valid and unchanged. The cascade loop is the single entry point for state
//! advancement - detect matches, clear them (with gravity and scoring),
//! refill, and repeat until the board is stable.
//!
//! The loop is written iteratively on purpose. Termination is almost sure
//! (refill draws fresh random symbols from a finite alphabet) but not proven
//! in a fixed number of rounds, so an explicit loop avoids stack-depth risk
//! on pathological boards. Callers who want a hard bound use
//! [`GameState::resolve_cascades_bounded`], which reports non-convergence
//! instead of truncating silently.

use tui_match3_types::{CoreError, Symbol};

use crate::board::Board;
use crate::matches::{find_matches, Match};
use crate::rng::SimpleRng;
use crate::scoring::{removal_score, removed_tile_count};

/// Immutable board-plus-score snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    score: u32,
}

/// Build an initial game: a fully populated random board with score 0
pub fn create_game(size: usize, alphabet: &[Symbol], rng: &mut SimpleRng) -> GameState {
    let mut board = Board::new(size);
    for row in 0..size {
        for col in 0..size {
            board.set(row, col, Some(rng.choose(alphabet)));
        }
    }
    GameState::new(board, 0)
}

impl GameState {
    pub fn new(board: Board, score: u32) -> Self {
        Self { board, score }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Exchange two cell contents.
    ///
    /// No validity check and no cascade - callers invoke
    /// [`resolve_cascades`](Self::resolve_cascades) separately, exactly like
    /// the surrounding shell does.
    pub fn apply_swap(
        &self,
        a: (usize, usize),
        b: (usize, usize),
    ) -> Result<GameState, CoreError> {
        let board = self.board.swapped(a, b)?;
        Ok(GameState::new(board, self.score))
    }

    /// Clear every cell covered by the given matches, drop the survivors,
    /// and award 10 points per removed tile.
    ///
    /// An empty match set is the identity. Cells covered by crossing
    /// matches are cleared once but still count once per match toward the
    /// score (see `scoring`).
    pub fn remove_matches(&self, matches: &[Match]) -> GameState {
        if matches.is_empty() {
            return self.clone();
        }

        let mut cleared = self.board.clone();
        for m in matches {
            for (row, col) in m.cells() {
                cleared.set(row, col, None);
            }
        }

        let removed = removed_tile_count(matches);
        GameState::new(
            cleared.apply_gravity(),
            self.score.saturating_add(removal_score(removed)),
        )
    }

    /// Replace every empty cell with a freshly drawn random symbol.
    ///
    /// Non-empty cells and the score are untouched.
    pub fn refill(&self, alphabet: &[Symbol], rng: &mut SimpleRng) -> GameState {
        let size = self.board.size();
        let mut filled = self.board.clone();
        for row in 0..size {
            for col in 0..size {
                if filled.get(row, col) == Some(None) {
                    filled.set(row, col, Some(rng.choose(alphabet)));
                }
            }
        }
        GameState::new(filled, self.score)
    }

    /// Resolve all cascades: clear matches, apply gravity, refill, and
    /// repeat until the board has no matches left.
    ///
    /// The returned state satisfies `find_matches(state.board()).is_empty()`,
    /// so resolving twice is a no-op.
    pub fn resolve_cascades(&self, alphabet: &[Symbol], rng: &mut SimpleRng) -> GameState {
        let mut state = self.clone();
        loop {
            let matches = find_matches(&state.board);
            if matches.is_empty() {
                return state;
            }
            state = state.remove_matches(&matches).refill(alphabet, rng);
        }
    }

    /// Like [`resolve_cascades`](Self::resolve_cascades), but gives up after
    /// `max_rounds` clear/refill rounds.
    ///
    /// Reaching the cap is reported as [`CoreError::CascadeDidNotConverge`],
    /// never swallowed - a truncated cascade would otherwise look like a
    /// stable board.
    pub fn resolve_cascades_bounded(
        &self,
        alphabet: &[Symbol],
        rng: &mut SimpleRng,
        max_rounds: usize,
    ) -> Result<GameState, CoreError> {
        let mut state = self.clone();
        for _ in 0..max_rounds {
            let matches = find_matches(&state.board);
            if matches.is_empty() {
                return Ok(state);
            }
            state = state.remove_matches(&matches).refill(alphabet, rng);
        }

        if find_matches(&state.board).is_empty() {
            Ok(state)
        } else {
            Err(CoreError::CascadeDidNotConverge { rounds: max_rounds })
        }
    }
}
