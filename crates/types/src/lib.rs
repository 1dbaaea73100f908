//! Core types shared across the application
//! This module contains pure data types with no I/O dependencies

use thiserror::Error;

/// Default board dimension (boards are always square)
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Minimum run length that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Points awarded per removed tile
pub const POINTS_PER_TILE: u32 = 10;

/// Character used for empty cells in the text serialization
pub const EMPTY_GLYPH: char = '.';

/// Tile symbols (the fixed six-letter alphabet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Symbol {
    /// The full alphabet, in drawing order
    pub const ALL: [Symbol; 6] = [
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
    ];

    /// Parse a symbol from its character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Symbol::A),
            'B' => Some(Symbol::B),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'E' => Some(Symbol::E),
            'F' => Some(Symbol::F),
            _ => None,
        }
    }

    /// Convert to the display character
    pub fn as_char(&self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::E => 'E',
            Symbol::F => 'F',
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a symbol)
pub type Cell = Option<Symbol>;

/// Axis of a matched run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }
}

/// Errors reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A swap referenced a cell outside `[0, size)`
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        size: usize,
    },
    /// A capped cascade did not reach a stable board within its budget
    #[error("cascade did not converge after {rounds} rounds")]
    CascadeDidNotConverge { rounds: usize },
}
