//! Perfect-play Tic-Tac-Toe backed by an exhaustive minimax game tree
//!
//! This crate provides:
//! - Board representation and terminal evaluation
//! - Full game tree enumeration from the empty board (every reachable board)
//! - Minimax scoring of every node in the tree
//! - A live game session that maps human moves onto the pre-built tree
//! - A command line front end for playing and analyzing the tree

pub mod cli;
pub mod error;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use session::{Opening, Session, SessionConfig, Status};
pub use tictactoe::{
    Board, Cell, GameTree, NodeId, Outcome, Player, evaluate, new_game_tree,
};
