//! Exhaustive game tree construction and minimax scoring
//!
//! The tree is stored as an arena: every [`Node`] lives in one `Vec` and is
//! addressed by a [`NodeId`]. Expanding a node appends all of its children in
//! one go, so a node's children always occupy a contiguous index range.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Board, Outcome, Player};

/// Index of a node in a [`GameTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One reachable board configuration
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    first_child: u32,
    child_count: u8,
    score: i32,
    expanded: bool,
}

impl Node {
    fn new(board: Board) -> Self {
        Self {
            board,
            first_child: 0,
            child_count: 0,
            score: 0,
            expanded: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Minimax score stored by the last scoring pass (0 before any pass, and
    /// for the node a pass was started from).
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn child_count(&self) -> usize {
        self.child_count as usize
    }
}

/// Number of finished games by outcome, counting each root-to-terminal path once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Complete game tree rooted at one board.
///
/// Construction does not stop at won positions: a node whose board already has
/// three in a row is still expanded with further moves. Scoring never descends
/// past such a node, so those continuations are never chosen.
#[derive(Debug, Clone)]
pub struct GameTree {
    nodes: Vec<Node>,
    first_mover: Player,
}

impl GameTree {
    /// Create a tree holding only the empty board, with X to move
    pub fn new() -> Self {
        Self::with_root(Board::new(), Player::X)
    }

    /// Create a tree holding only `board`, with `first_mover` placing the next mark
    pub fn with_root(board: Board, first_mover: Player) -> Self {
        Self {
            nodes: vec![Node::new(board)],
            first_mover,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Player who moves from the root
    pub fn first_mover(&self) -> Player {
        self.first_mover
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn board(&self, id: NodeId) -> &Board {
        &self.nodes[id.index()].board
    }

    /// Total number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in the tree, in creation order (parents before children)
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + use<> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Children of `id` in row-major order of the cell that was marked
    pub fn children(&self, id: NodeId) -> impl ExactSizeIterator<Item = NodeId> + use<> {
        let node = &self.nodes[id.index()];
        let start = node.first_child;
        (start..start + u32::from(node.child_count)).map(NodeId)
    }

    /// Number of marks placed on the way from the root to `id`
    pub fn depth(&self, id: NodeId) -> usize {
        self.board(id).occupied_count() - self.board(self.root()).occupied_count()
    }

    /// Generate every child of `id` by placing `mover` in each empty cell.
    ///
    /// Returns the number of children created; a node that was already
    /// expanded is left alone and yields 0.
    pub fn expand(&mut self, id: NodeId, mover: Player) -> usize {
        let node = &self.nodes[id.index()];
        if node.expanded {
            return 0;
        }

        let board = node.board;
        let first_child = self.nodes.len() as u32;
        let empty = board.empty_positions();
        self.nodes.extend(
            empty
                .iter()
                .map(|&pos| Node::new(board.with_mark(pos, mover))),
        );

        let node = &mut self.nodes[id.index()];
        node.first_child = first_child;
        node.child_count = empty.len() as u8;
        node.expanded = true;
        empty.len()
    }

    /// Enumerate every board reachable from the root.
    ///
    /// Runs one pass per ply plus a final pass over the full boards. Pass `d`
    /// expands every node that is not yet expanded, which at that point is
    /// exactly the nodes created by pass `d - 1`, so each node is expanded with
    /// the mover that matches its depth.
    pub fn build_full_tree(&mut self) {
        let passes = self.board(self.root()).empty_count() + 1;
        let mut mover = self.first_mover;

        for pass in 0..passes {
            let frontier = self.nodes.len();
            let mut created = 0;
            for index in 0..frontier as u32 {
                created += self.expand(NodeId(index), mover);
            }
            debug!(pass, %mover, created, total = self.nodes.len(), "expansion pass");
            mover = mover.opponent();
        }

        info!(nodes = self.nodes.len(), "game tree built");
    }

    /// Score the subtree under `id` with minimax and store each descendant's score.
    ///
    /// `maximizing` is true when X is to move at `id`. The returned value is the
    /// score of `id` itself, which is not stored on the node.
    pub fn minimax(&mut self, id: NodeId, maximizing: bool) -> i32 {
        let sheet = self.score_subtree(id, maximizing);
        for (node, score) in self.nodes.iter_mut().zip(sheet.scores) {
            if let Some(score) = score {
                node.score = score;
            }
        }
        sheet.value
    }

    /// Compute minimax scores for the subtree under `id` without touching the tree
    pub fn score_subtree(&self, id: NodeId, maximizing: bool) -> ScoreSheet {
        let mut scores = vec![None; self.nodes.len()];
        let value = self.score_into(id, maximizing, &mut scores);
        ScoreSheet { value, scores }
    }

    fn score_into(&self, id: NodeId, maximizing: bool, scores: &mut [Option<i32>]) -> i32 {
        if let Some(score) = self.board(id).evaluate().score() {
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for child in self.children(id) {
            let score = self.score_into(child, !maximizing, scores);
            scores[child.index()] = Some(score);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        debug_assert!(
            self.node(id).child_count() > 0,
            "in-progress node scored before expansion:\n{}",
            self.board(id)
        );
        best
    }

    /// Find the child of `parent` whose board equals `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ChildNotFound`] if `board` is not one move away
    /// from `parent`'s board.
    pub fn find_child(&self, parent: NodeId, board: &Board) -> crate::Result<NodeId> {
        self.children(parent)
            .find(|&child| self.board(child) == board)
            .ok_or(crate::Error::ChildNotFound { board: *board })
    }

    /// Child of `id` with the highest stored score; ties go to the first in
    /// enumeration order. `None` when `id` has no children.
    pub fn best_scored_child(&self, id: NodeId) -> Option<NodeId> {
        self.pick_child(id, |candidate, current| candidate > current)
    }

    /// Child of `id` with the lowest stored score, ties to the first
    pub fn worst_scored_child(&self, id: NodeId) -> Option<NodeId> {
        self.pick_child(id, |candidate, current| candidate < current)
    }

    fn pick_child(&self, id: NodeId, better: impl Fn(i32, i32) -> bool) -> Option<NodeId> {
        let mut picked: Option<NodeId> = None;
        for child in self.children(id) {
            let replace = match picked {
                Some(current) => better(self.node(child).score, self.node(current).score),
                None => true,
            };
            if replace {
                picked = Some(child);
            }
        }
        picked
    }

    /// Node count at each depth from the root (index 0 is the root itself)
    pub fn depth_counts(&self) -> Vec<usize> {
        let max_depth = self.board(self.root()).empty_count();
        let mut counts = vec![0; max_depth + 1];
        for id in self.node_ids() {
            counts[self.depth(id)] += 1;
        }
        counts
    }

    /// Count finished games by walking the tree and stopping at terminal boards
    pub fn outcome_counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        let mut stack = vec![self.root()];

        while let Some(id) = stack.pop() {
            match self.board(id).evaluate() {
                Outcome::XWins => counts.x_wins += 1,
                Outcome::OWins => counts.o_wins += 1,
                Outcome::Draw => counts.draws += 1,
                Outcome::InProgress => stack.extend(self.children(id)),
            }
        }

        counts
    }
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores produced by [`GameTree::score_subtree`]
#[derive(Debug, Clone)]
pub struct ScoreSheet {
    /// Score of the node the pass started from
    pub value: i32,
    /// Score per node index; `None` for nodes the pass did not reach
    pub scores: Vec<Option<i32>>,
}

/// Build the full tree from the empty board and score it with X maximizing.
///
/// Returns the tree and the root's minimax value.
pub fn new_game_tree() -> (GameTree, i32) {
    let mut tree = GameTree::new();
    tree.build_full_tree();
    let root = tree.root();
    let value = tree.minimax(root, true);
    info!(value, "game tree scored");
    (tree, value)
}
