//! Scoring module - points for removed tiles
//!
//! Compatibility note:
//! The removed count sums match lengths as-is. A cell covered by both a
//! horizontal and a vertical match therefore contributes twice (an L of
//! 3 + 3 sharing its corner scores 60, not 50). This mirrors the reference
//! scoring rule exactly and is pinned by the cascade tests.

use tui_match3_types::POINTS_PER_TILE;

use crate::matches::Match;

/// Total removed-tile count for a match set (sum of lengths, crossings
/// counted per match)
pub fn removed_tile_count(matches: &[Match]) -> usize {
    matches.iter().map(|m| m.length).sum()
}

/// Score delta for a removal pass: 10 points per removed tile
pub fn removal_score(removed: usize) -> u32 {
    (removed as u32).saturating_mul(POINTS_PER_TILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_match3_types::Direction;

    fn horizontal(row: usize, col: usize, length: usize) -> Match {
        Match {
            direction: Direction::Horizontal,
            row,
            col,
            length,
        }
    }

    fn vertical(row: usize, col: usize, length: usize) -> Match {
        Match {
            direction: Direction::Vertical,
            row,
            col,
            length,
        }
    }

    #[test]
    fn test_removal_score_per_tile() {
        assert_eq!(removal_score(0), 0);
        assert_eq!(removal_score(3), 30);
        assert_eq!(removal_score(5), 50);
    }

    #[test]
    fn test_removed_count_sums_lengths() {
        let matches = [horizontal(0, 0, 3), vertical(2, 4, 4)];
        assert_eq!(removed_tile_count(&matches), 7);
    }

    #[test]
    fn test_crossing_cell_counted_twice() {
        // Both runs cover (0, 0); the shared cell still counts once per run.
        let matches = [horizontal(0, 0, 3), vertical(0, 0, 3)];
        assert_eq!(removed_tile_count(&matches), 6);
        assert_eq!(removal_score(removed_tile_count(&matches)), 60);
    }
}
