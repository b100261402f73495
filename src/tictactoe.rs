//! Tic-Tac-Toe board, terminal evaluation and the exhaustive game tree

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod outcome;

pub use board::{Board, CELLS, Cell, Player, SIZE};
pub use game_tree::{GameTree, Node, NodeId, OutcomeCounts, ScoreSheet, new_game_tree};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Outcome, evaluate};
