//! Terminal presentation and input glue.
//!
//! This layer is deliberately thin: the engine in `core` stays deterministic
//! and I/O-free, while this crate renders boards with per-symbol colors and
//! parses line-based move commands. No raw mode, no alternate screen - the
//! game is a plain prompt loop.

pub mod board_view;
pub mod prompt;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use board_view::{encode_board_into, symbol_color};
pub use prompt::{parse_move, MoveCommand};
