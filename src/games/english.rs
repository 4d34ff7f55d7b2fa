//! Classic English game setup.

use crate::core::{Board, Cell, Position};
use crate::history::HistoryController;
use crate::rules::EnglishRules;
use crate::session::GameSession;

/// The classic 7x7 English cross board.
///
/// The four 2x2 corner blocks are invalid; every hole holds a peg except
/// the center, which starts empty.
///
/// ```
/// use peg_solitaire::games::english;
///
/// let board = english::board();
/// assert_eq!(board.peg_count(), 32);
/// ```
#[must_use]
pub fn board() -> Board {
    let grid = (0..7)
        .map(|r| {
            (0..7)
                .map(|c| {
                    if is_cross_hole(r, c) {
                        Cell::Peg
                    } else {
                        Cell::Invalid
                    }
                })
                .collect()
        })
        .collect();

    Board::new(grid).with_cell(Position::new(3, 3), Cell::Empty)
}

fn is_cross_hole(r: i32, c: i32) -> bool {
    let edge_row = r <= 1 || r >= 5;
    let edge_col = c <= 1 || c >= 5;
    !(edge_row && edge_col)
}

/// A fresh standard game: the cross board under [`EnglishRules`], with
/// empty history.
///
/// Plain construction, no shared state; callers wanting a custom board or
/// ruleset build the [`GameSession`] themselves.
#[must_use]
pub fn new_game() -> (GameSession, HistoryController) {
    (
        GameSession::new(board(), Box::new(EnglishRules)),
        HistoryController::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{GameStatus, RuleSet};

    #[test]
    fn test_cross_layout() {
        let board = board();

        assert_eq!(board.rows(), 7);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.peg_count(), 32);
        assert_eq!(board.cell_at(Position::new(3, 3)), Cell::Empty);

        // Corner blocks are off the board.
        assert_eq!(board.cell_at(Position::new(0, 0)), Cell::Invalid);
        assert_eq!(board.cell_at(Position::new(1, 5)), Cell::Invalid);
        assert_eq!(board.cell_at(Position::new(5, 1)), Cell::Invalid);
        assert_eq!(board.cell_at(Position::new(6, 6)), Cell::Invalid);

        // Cross arms are pegged.
        assert_eq!(board.cell_at(Position::new(0, 3)), Cell::Peg);
        assert_eq!(board.cell_at(Position::new(3, 0)), Cell::Peg);
    }

    #[test]
    fn test_opening_moves() {
        let board = board();

        // Only the four jumps into the center hole are available.
        let moves = EnglishRules.legal_moves(&board);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to == Position::new(3, 3)));
    }

    #[test]
    fn test_new_game_is_running() {
        let (session, controller) = new_game();

        assert_eq!(session.status(), GameStatus::Running);
        assert!(!controller.can_undo());
        assert!(!controller.can_redo());
    }
}
