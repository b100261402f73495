//! Shared fixtures for the integration tests.
//!
//! Building and scoring the full tree visits close to a million nodes, so each
//! test binary does it once and hands out a shared reference.

#![allow(dead_code)]

use std::sync::OnceLock;

use ttt_minimax::{Board, GameTree, NodeId, Player, new_game_tree};

static SCORED_TREE: OnceLock<(GameTree, i32)> = OnceLock::new();

/// The full tree from the empty board, scored with X maximizing
pub fn scored_tree() -> &'static GameTree {
    &SCORED_TREE.get_or_init(new_game_tree).0
}

/// Minimax value returned for the root when the shared tree was scored
pub fn root_value() -> i32 {
    SCORED_TREE.get_or_init(new_game_tree).1
}

/// Walk from the root through `moves`, alternating X and O
pub fn follow(tree: &GameTree, moves: &[(usize, usize)]) -> NodeId {
    let mut node = tree.root();
    let mut mover = Player::X;
    for &(row, col) in moves {
        let board: Board = tree
            .board(node)
            .apply_move(row, col, mover)
            .expect("scripted move must be legal");
        node = tree
            .find_child(node, &board)
            .expect("scripted move must be in the tree");
        mover = mover.opponent();
    }
    node
}
