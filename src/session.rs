//! Live game against a human on top of a pre-built, scored game tree
//!
//! A [`Session`] only walks the tree: every human move is mapped back onto a
//! child node with [`GameTree::find_child`], and every computer move is the
//! child with the best stored score for the computer's mark.

use std::{fmt, str::FromStr};

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tictactoe::{Board, GameTree, NodeId, Outcome, Player};

/// How the computer picks its first move when it opens the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opening {
    /// Any of the nine first moves, uniformly at random
    #[default]
    Random,
    /// The best-scored first move, ties to the first in row-major order
    Best,
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Opening::Random => "random",
            Opening::Best => "best",
        };
        f.write_str(label)
    }
}

impl FromStr for Opening {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "rand" => Ok(Opening::Random),
            "best" | "optimal" => Ok(Opening::Best),
            _ => Err(crate::Error::ParseOpening {
                input: s.to_string(),
                expected: "random, best".to_string(),
            }),
        }
    }
}

/// Configuration for a game session.
///
/// # Examples
///
/// ```
/// use ttt_minimax::{Opening, Player, SessionConfig};
///
/// let config = SessionConfig::new(Player::X)
///     .with_opening(Opening::Best)
///     .with_seed(7);
/// assert_eq!(config.human(), Player::O);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mark played by the computer; X always moves first
    pub computer: Player,
    /// Opening strategy when the computer plays X
    pub opening: Opening,
    /// Random seed for reproducible openings
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration with the computer playing `computer`
    pub fn new(computer: Player) -> Self {
        Self {
            computer,
            opening: Opening::default(),
            seed: None,
        }
    }

    /// Set the opening strategy.
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.opening = opening;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mark played by the human
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// State of the game from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    ComputerWon,
    HumanWon,
    Draw,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }
}

/// One game in progress.
///
/// The tree must be built from the empty board and scored with X maximizing,
/// as done by [`crate::new_game_tree`].
#[derive(Clone)]
pub struct Session<'t> {
    tree: &'t GameTree,
    current: NodeId,
    config: SessionConfig,
    rng: StdRng,
}

impl<'t> Session<'t> {
    /// Start a game. When the computer plays X it makes its opening move here.
    pub fn new(tree: &'t GameTree, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };

        let mut session = Self {
            tree,
            current: tree.root(),
            config,
            rng,
        };

        if session.config.computer == tree.first_mover() {
            session.play_opening();
        }

        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Node of the current position
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn board(&self) -> &Board {
        self.tree.board(self.current)
    }

    pub fn outcome(&self) -> Outcome {
        self.board().evaluate()
    }

    pub fn status(&self) -> Status {
        match self.outcome().winner() {
            Some(winner) if winner == self.config.computer => Status::ComputerWon,
            Some(_) => Status::HumanWon,
            None if self.outcome() == Outcome::Draw => Status::Draw,
            None => Status::InProgress,
        }
    }

    /// Play the human's mark at `(row, col)` and let the computer answer.
    ///
    /// The game ends without a computer reply if the human's move finishes it.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] if the game has already finished
    /// - [`crate::Error::PositionOutOfBounds`] / [`crate::Error::CellOccupied`]
    ///   for an illegal move; the session is unchanged and the move may be retried
    /// - [`crate::Error::ChildNotFound`] if the resulting board is not in the tree
    pub fn play_human(&mut self, row: usize, col: usize) -> crate::Result<Status> {
        if self.outcome().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let board = self.board().apply_move(row, col, self.config.human())?;
        self.current = self.tree.find_child(self.current, &board)?;
        debug!(row, col, board = %board.encode(), "human move");

        if !self.outcome().is_terminal() {
            self.play_computer();
        }

        Ok(self.status())
    }

    fn play_opening(&mut self) {
        let choice = match self.config.opening {
            Opening::Best => self.pick_computer_move(),
            Opening::Random => {
                let options: Vec<NodeId> = self.tree.children(self.current).collect();
                options.choose(&mut self.rng).copied()
            }
        };

        if let Some(next) = choice {
            self.current = next;
            debug!(opening = %self.config.opening, board = %self.board().encode(), "computer opening");
        }
    }

    fn play_computer(&mut self) {
        if let Some(next) = self.pick_computer_move() {
            self.current = next;
            debug!(
                board = %self.board().encode(),
                score = self.tree.node(next).score(),
                "computer move"
            );
        }
    }

    fn pick_computer_move(&self) -> Option<NodeId> {
        match self.config.computer {
            Player::X => self.tree.best_scored_child(self.current),
            Player::O => self.tree.worst_scored_child(self.current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_parses_and_displays() {
        assert_eq!("Best".parse::<Opening>().unwrap(), Opening::Best);
        assert_eq!(" random ".parse::<Opening>().unwrap(), Opening::Random);
        assert_eq!(Opening::Best.to_string(), "best");

        let err = "corner".parse::<Opening>().unwrap_err();
        assert!(err.to_string().contains("random, best"));
    }

    #[test]
    fn config_builder_sets_fields() {
        let config = SessionConfig::default()
            .with_opening(Opening::Best)
            .with_seed(3);
        assert_eq!(config.computer, Player::X);
        assert_eq!(config.human(), Player::O);
        assert_eq!(config.opening, Opening::Best);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn config_clones_and_serializes() {
        let config = SessionConfig::new(Player::O).with_opening(Opening::Best);
        let copy = config.clone();
        assert_eq!(copy.computer, Player::O);
        assert_eq!(copy.opening, Opening::Best);

        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.computer, config.computer);
        assert_eq!(back.seed, None);
    }

    #[test]
    fn status_reports_game_end() {
        assert!(!Status::InProgress.is_over());
        assert!(Status::Draw.is_over());
        assert!(Status::HumanWon.is_over());
    }
}
