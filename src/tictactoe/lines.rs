//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::CELLS};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first completed line in scan order (rows, columns, diagonals).
    ///
    /// Boards with two completed lines for different players are unreachable
    /// under legal play; for those the first line found decides.
    pub fn completed_line_owner(cells: &[Cell; CELLS]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let first = cells[a];
            if first != Cell::Empty && first == cells[b] && first == cells[c] {
                first.owner()
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_line_owner() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::completed_line_owner(&cells), Some(Player::X));
    }

    #[test]
    fn test_vertical_line_owner() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert_eq!(LineAnalyzer::completed_line_owner(&cells), Some(Player::O));
    }

    #[test]
    fn test_anti_diagonal_line_owner() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(LineAnalyzer::completed_line_owner(&cells), Some(Player::X));
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::completed_line_owner(&cells), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        // XXO
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert_eq!(LineAnalyzer::completed_line_owner(&cells), None);
    }
}
