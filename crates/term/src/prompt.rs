//! Move prompt parsing.
//!
//! One move per line: `r0 c0 r1 c1` swaps two cells, `q` quits. Coordinates
//! are validated against the board size here, before the engine is called -
//! the core still carries its own typed check as a last line of defense.

use anyhow::{bail, Context, Result};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Quit,
    Swap {
        from: (usize, usize),
        to: (usize, usize),
    },
}

/// Parse one line of input against a board of the given size.
pub fn parse_move(line: &str, size: usize) -> Result<MoveCommand> {
    let line = line.trim();
    if line == "q" {
        return Ok(MoveCommand::Quit);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        bail!("expected `r0 c0 r1 c1` (or `q` to quit), got {:?}", line);
    }

    let mut coords = [0usize; 4];
    for (slot, field) in coords.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .with_context(|| format!("`{}` is not a coordinate", field))?;
    }

    for &value in &coords {
        if value >= size {
            bail!("coordinate {} is outside the {}x{} board", value, size, size);
        }
    }

    Ok(MoveCommand::Swap {
        from: (coords[0], coords[1]),
        to: (coords[2], coords[3]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quit() {
        assert_eq!(parse_move("q", 8).unwrap(), MoveCommand::Quit);
        assert_eq!(parse_move("  q  ", 8).unwrap(), MoveCommand::Quit);
    }

    #[test]
    fn parses_swap() {
        assert_eq!(
            parse_move("0 1 0 2", 8).unwrap(),
            MoveCommand::Swap {
                from: (0, 1),
                to: (0, 2)
            }
        );
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_move("", 8).is_err());
        assert!(parse_move("0 1 2", 8).is_err());
        assert!(parse_move("0 1 2 3 4", 8).is_err());
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!(parse_move("0 1 0 x", 8).is_err());
        assert!(parse_move("a b c d", 8).is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(parse_move("0 0 0 8", 8).is_err());
        assert!(parse_move("9 0 0 0", 8).is_err());
        assert!(parse_move("0 0 0 7", 8).is_ok());
    }
}
