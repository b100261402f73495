//! Error types for the tic-tac-toe engine

use thiserror::Error;

use crate::tictactoe::Board;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No child of the current node matches the supplied board.
    ///
    /// The tree is enumerated exhaustively, so this means the board is not one
    /// legal move away from the node it was looked up under.
    #[error("no child node matches board:\n{board}")]
    ChildNotFound { board: Board },

    #[error("position ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    PositionOutOfBounds { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("invalid opening '{input}'. Expected one of: {expected}")]
    ParseOpening { input: String, expected: String },

    #[error("invalid player '{input}' (expected 'x' or 'o')")]
    ParsePlayer { input: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

