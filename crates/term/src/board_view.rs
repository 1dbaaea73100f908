//! Board rendering: colored symbols with row/column index headers.
//!
//! Commands are queued into a byte buffer and flushed by the caller in one
//! write, so a frame never appears half-drawn.

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use tui_match3_core::Board;
use tui_match3_types::{Symbol, EMPTY_GLYPH};

/// Foreground color for a symbol.
pub fn symbol_color(sym: Symbol) -> Color {
    match sym {
        Symbol::A => Color::Red,
        Symbol::B => Color::Green,
        Symbol::C => Color::Yellow,
        Symbol::D => Color::Blue,
        Symbol::E => Color::Magenta,
        Symbol::F => Color::Cyan,
    }
}

/// Encode one frame - header, board rows, score line - into `out`.
///
/// Layout mirrors the text serialization of the board itself: one character
/// per cell (`.` when empty), columns space-separated, prefixed with index
/// headers so players can type coordinates directly.
pub fn encode_board_into(out: &mut Vec<u8>, board: &Board, score: u32) -> Result<()> {
    out.queue(Print("  "))?;
    for col in 0..board.size() {
        out.queue(Print(format!("{} ", col % 10)))?;
    }
    out.queue(Print("\n"))?;

    for row in 0..board.size() {
        out.queue(Print(format!("{} ", row % 10)))?;
        for col in 0..board.size() {
            match board.get(row, col) {
                Some(Some(sym)) => {
                    out.queue(SetForegroundColor(symbol_color(sym)))?;
                    out.queue(Print(sym.as_char()))?;
                    out.queue(ResetColor)?;
                }
                _ => {
                    out.queue(Print(EMPTY_GLYPH))?;
                }
            }
            out.queue(Print(" "))?;
        }
        out.queue(Print("\n"))?;
    }

    out.queue(Print(format!("\nscore: {}\n", score)))?;
    Ok(())
}
