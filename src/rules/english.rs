//! Standard English peg solitaire rules.

use crate::core::{Board, Cell, Move, Position};

use super::engine::{GameStatus, RuleSet};

/// Jump offsets probed from each origin: up, down, left, right.
const JUMPS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// The standard rules: a peg jumps orthogonally over an adjacent peg into
/// an empty hole two cells away, capturing the jumped peg.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishRules;

impl RuleSet for EnglishRules {
    fn is_legal(&self, board: &Board, mv: Move) -> bool {
        // Occupancy: a peg jumps a peg into an empty hole. Out-of-bounds
        // and Invalid positions fail these checks by resolving to Invalid.
        if board.cell_at(mv.from) != Cell::Peg {
            return false;
        }
        if board.cell_at(mv.over) != Cell::Peg {
            return false;
        }
        if board.cell_at(mv.to) != Cell::Empty {
            return false;
        }

        // Displacement: exactly two along exactly one axis.
        let dr = mv.to.row - mv.from.row;
        let dc = mv.to.col - mv.from.col;
        let orthogonal_two = (dr.abs() == 2 && dc == 0) || (dc.abs() == 2 && dr == 0);
        if !orthogonal_two {
            return false;
        }

        // The jumped hole must be the exact midpoint.
        mv.over == mv.from.offset(dr / 2, dc / 2)
    }

    fn legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();

        for row in 0..board.rows() as i32 {
            for col in 0..board.cols() as i32 {
                let from = Position::new(row, col);
                if board.cell_at(from) != Cell::Peg {
                    continue;
                }

                for (dr, dc) in JUMPS {
                    let mv = Move::between(from, from.offset(dr, dc));
                    if self.is_legal(board, mv) {
                        moves.push(mv);
                    }
                }
            }
        }

        moves
    }

    fn status(&self, board: &Board) -> GameStatus {
        if board.peg_count() == 1 {
            return GameStatus::Won;
        }
        if self.legal_moves(board).is_empty() {
            return GameStatus::Stuck;
        }
        GameStatus::Running
    }
}
