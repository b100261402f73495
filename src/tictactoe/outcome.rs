//! Terminal evaluation of a board

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Cell, Player, lines::LineAnalyzer};

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl Outcome {
    /// Fixed minimax score of a terminal outcome (X-win 1, O-win -1, draw 0).
    ///
    /// `None` while the game is still in progress.
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::XWins => Some(1),
            Outcome::OWins => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    fn from_winner(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::XWins => "X wins",
            Outcome::OWins => "O wins",
            Outcome::Draw => "draw",
            Outcome::InProgress => "in progress",
        };
        f.write_str(label)
    }
}

/// Evaluate a board: a completed line wins for its owner, a full board
/// without one is a draw, anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    if let Some(winner) = LineAnalyzer::completed_line_owner(cells) {
        return Outcome::from_winner(winner);
    }

    if cells.contains(&Cell::Empty) {
        Outcome::InProgress
    } else {
        Outcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_row_of_x_wins() {
        let board = Board::from_string("XXX ... ...").unwrap();
        assert_eq!(evaluate(&board), Outcome::XWins);
        assert_eq!(evaluate(&board).score(), Some(1));
    }

    #[test]
    fn diagonal_of_o_wins() {
        let board = Board::from_string("OX. XO. X.O").unwrap();
        assert_eq!(evaluate(&board), Outcome::OWins);
        assert_eq!(evaluate(&board).score(), Some(-1));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // XOX
        // XOO
        // OXX
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(evaluate(&board).score(), Some(0));
    }

    #[test]
    fn win_on_full_board_is_not_a_draw() {
        // XOX
        // OXO
        // OXX
        let board = Board::from_string("XOX OXO OXX").unwrap();
        assert_eq!(evaluate(&board), Outcome::XWins);
    }

    #[test]
    fn partial_board_is_in_progress() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(outcome.score(), None);
        assert!(!outcome.is_terminal());
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn outcome_is_path_independent() {
        // Same final position reached through two move orders.
        let a = Board::new()
            .apply_move(0, 0, Player::X)
            .and_then(|b| b.apply_move(1, 0, Player::O))
            .and_then(|b| b.apply_move(0, 1, Player::X))
            .and_then(|b| b.apply_move(1, 1, Player::O))
            .and_then(|b| b.apply_move(0, 2, Player::X))
            .unwrap();
        let b = Board::new()
            .apply_move(0, 2, Player::X)
            .and_then(|b| b.apply_move(1, 1, Player::O))
            .and_then(|b| b.apply_move(0, 0, Player::X))
            .and_then(|b| b.apply_move(1, 0, Player::O))
            .and_then(|b| b.apply_move(0, 1, Player::X))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(evaluate(&a), evaluate(&b));
        assert_eq!(evaluate(&a).winner(), Some(Player::X));
    }
}
