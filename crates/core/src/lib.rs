//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole cascade-resolution engine. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every mechanic is a pure value-in/value-out function
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`board`]: square grid with bounds-checked access, swap and gravity
//! - [`matches`]: maximal same-symbol run detection along rows and columns
//! - [`game_state`]: board-plus-score snapshots and the cascade loop
//! - [`rng`]: seedable LCG symbol source, injected instead of global
//! - [`scoring`]: removed-tile counting and the per-tile score rule
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{create_game, SimpleRng};
//! use tui_match3_types::Symbol;
//!
//! let mut rng = SimpleRng::new(12345);
//! let game = create_game(8, &Symbol::ALL, &mut rng);
//!
//! // Swap two neighbours, then let the cascade settle the board.
//! let game = game.apply_swap((0, 0), (0, 1)).unwrap();
//! let game = game.resolve_cascades(&Symbol::ALL, &mut rng);
//!
//! assert!(tui_match3_core::find_matches(game.board()).is_empty());
//! ```

pub mod board;
pub mod game_state;
pub mod matches;
pub mod rng;
pub mod scoring;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{create_game, GameState};
pub use matches::{find_matches, Match};
pub use rng::SimpleRng;
pub use scoring::{removal_score, removed_tile_count};
