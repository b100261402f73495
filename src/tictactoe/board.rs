//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::outcome::{Outcome, evaluate};

/// Side length of the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELLS: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game; also the mark placed by the mover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// A 3x3 grid of cells in row-major order.
///
/// Two boards are equal iff all nine cells match positionally. The type is
/// `Copy` (nine bytes), so a move always yields a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is filtered out, so `"XO. .X. ..O"` and multi-line grids
    /// both parse. Empty cells are `.` or `_`.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cell characters remain or any character
    /// is not a valid cell representation.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().take(CELLS).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Get cell at `(row, col)`; both must be below [`SIZE`]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * SIZE + col]
    }

    /// Check if a position (0-8) is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        CELLS - self.empty_count()
    }

    /// Place `mark` at `pos` without checking occupancy.
    ///
    /// Used by tree enumeration, which only ever targets empty cells.
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub(crate) fn with_mark(&self, pos: usize, mark: Player) -> Board {
        let mut next = *self;
        next.cells[pos] = mark.to_cell();
        next
    }

    /// Place `mark` at `(row, col)` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PositionOutOfBounds`] if either coordinate is
    /// outside 0-2, and [`crate::Error::CellOccupied`] if the cell is taken.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, row: usize, col: usize, mark: Player) -> crate::Result<Board> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::PositionOutOfBounds { row, col });
        }

        let pos = row * SIZE + col;
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { row, col });
        }

        Ok(self.with_mark(pos, mark))
    }

    /// Terminal evaluation of this board
    pub fn evaluate(&self) -> Outcome {
        evaluate(self)
    }

    /// Find the first position where two boards differ
    pub fn find_changed_position(&self, other: &Board) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }

    /// Compact single-line encoding, e.g. `X...O....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(SIZE) && i < CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();

        let next = board.apply_move(1, 1, Player::X).unwrap();
        assert_eq!(next.get(1, 1), Cell::X);
        assert_eq!(board.get(1, 1), Cell::Empty);

        let result = next.apply_move(1, 1, Player::O);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::new();
        assert!(matches!(
            board.apply_move(3, 0, Player::X),
            Err(crate::Error::PositionOutOfBounds { row: 3, col: 0 })
        ));
        assert!(matches!(
            board.apply_move(0, 7, Player::O),
            Err(crate::Error::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_equality_is_positional() {
        let a = Board::from_string("X.. ... ...").unwrap();
        let b = Board::new().apply_move(0, 0, Player::X).unwrap();
        let c = Board::new().apply_move(0, 1, Player::X).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XO.\n.X.\n..O").unwrap();
        assert_eq!(board.get(0, 0), Cell::X);
        assert_eq!(board.get(0, 1), Cell::O);
        assert_eq!(board.get(1, 1), Cell::X);
        assert_eq!(board.get(2, 2), Cell::O);
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XO.?....."),
            Err(crate::Error::InvalidCellCharacter {
                character: '?',
                position: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_whitespace_separates_but_never_fills_cells() {
        assert_eq!(Cell::from_char(' '), None);
        assert_eq!(Cell::from_char('_'), Some(Cell::Empty));

        // Spaces are dropped, so they cannot stand in for empty cells
        assert!(matches!(
            Board::from_string("X   O    "),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert_eq!(
            Board::from_string("X_. _O_ ..X").unwrap(),
            Board::from_string("X..\n.O.\n..X").unwrap()
        );
    }

    #[test]
    fn test_empty_positions_row_major() {
        let board = Board::from_string("X.O .X. O..").unwrap();
        assert_eq!(board.empty_positions(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("X.. .O. ..X").unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::O.to_cell().owner(), Some(Player::O));
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(" x ".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
