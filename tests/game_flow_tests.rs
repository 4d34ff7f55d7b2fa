//! End-to-end scenarios: rules, session, observers, and history together.

use std::cell::RefCell;
use std::rc::Rc;

use peg_solitaire::games::english;
use peg_solitaire::{
    Board, Cell, EnglishRules, GameListener, GameSession, GameStatus, HistoryController, Move,
    MoveCommand, Position, RuleSet,
};

fn jump(from: Position, to: Position) -> Box<MoveCommand> {
    Box::new(MoveCommand::new(Move::between(from, to)))
}

#[test]
fn test_single_jump_wins_tiny_board() {
    let board = Board::new(vec![vec![Cell::Peg, Cell::Peg, Cell::Empty]]);
    let mut session = GameSession::new(board, Box::new(EnglishRules));
    let mut history = HistoryController::new();

    assert_eq!(session.status(), GameStatus::Running);

    assert!(history.execute(&mut session, jump(Position::new(0, 0), Position::new(0, 2))));

    assert_eq!(session.board().cell_at(Position::new(0, 0)), Cell::Empty);
    assert_eq!(session.board().cell_at(Position::new(0, 1)), Cell::Empty);
    assert_eq!(session.board().cell_at(Position::new(0, 2)), Cell::Peg);
    assert_eq!(session.board().peg_count(), 1);
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_separated_pegs_are_stuck() {
    // The only candidate jump needs a peg at (0, 1), which is empty.
    let board = Board::new(vec![vec![Cell::Peg, Cell::Empty, Cell::Peg]]);
    let session = GameSession::new(board, Box::new(EnglishRules));

    assert!(EnglishRules.legal_moves(session.board()).is_empty());
    assert_eq!(session.status(), GameStatus::Stuck);
}

/// Counts callbacks without looking at their payloads.
#[derive(Default)]
struct Counts {
    boards: usize,
    statuses: usize,
}

struct CountingListener {
    counts: Rc<RefCell<Counts>>,
}

impl GameListener for CountingListener {
    fn on_board_changed(&mut self, _board: &Board) {
        self.counts.borrow_mut().boards += 1;
    }

    fn on_status_changed(&mut self, _status: GameStatus) {
        self.counts.borrow_mut().statuses += 1;
    }
}

#[test]
fn test_listener_hears_status_only_when_it_changes() {
    // Two independent jumps: the first keeps the game running, the second
    // leaves it stuck.
    let board = Board::new(vec![vec![
        Cell::Peg,
        Cell::Peg,
        Cell::Empty,
        Cell::Empty,
        Cell::Peg,
        Cell::Peg,
        Cell::Empty,
    ]]);
    let mut session = GameSession::new(board, Box::new(EnglishRules));
    let mut history = HistoryController::new();

    let counts = Rc::new(RefCell::new(Counts::default()));
    session.add_listener(Box::new(CountingListener {
        counts: Rc::clone(&counts),
    }));

    assert!(history.execute(&mut session, jump(Position::new(0, 0), Position::new(0, 2))));
    assert_eq!(session.status(), GameStatus::Running);
    assert_eq!(counts.borrow().boards, 1);
    assert_eq!(counts.borrow().statuses, 0);

    assert!(history.execute(&mut session, jump(Position::new(0, 4), Position::new(0, 6))));
    assert_eq!(session.status(), GameStatus::Stuck);
    assert_eq!(counts.borrow().boards, 2);
    assert_eq!(counts.borrow().statuses, 1);

    // Undoing the second jump flips the status back to running.
    assert!(history.undo(&mut session));
    assert_eq!(counts.borrow().boards, 3);
    assert_eq!(counts.borrow().statuses, 2);
}

#[test]
fn test_illegal_command_leaves_session_and_listeners_quiet() {
    let (mut session, mut history) = english::new_game();
    let counts = Rc::new(RefCell::new(Counts::default()));
    session.add_listener(Box::new(CountingListener {
        counts: Rc::clone(&counts),
    }));

    // Jumping out of the empty center is not legal.
    assert!(!history.execute(&mut session, jump(Position::new(3, 3), Position::new(3, 5))));

    assert_eq!(session.board(), &english::board());
    assert_eq!(session.status(), GameStatus::Running);
    assert_eq!(counts.borrow().boards, 0);
    assert_eq!(counts.borrow().statuses, 0);
}

#[test]
fn test_english_opening_with_undo_and_redo() {
    let (mut session, mut history) = english::new_game();
    let initial = session.board().clone();

    assert!(history.execute(&mut session, jump(Position::new(1, 3), Position::new(3, 3))));
    assert_eq!(session.board().peg_count(), 31);

    assert!(history.execute(&mut session, jump(Position::new(2, 5), Position::new(2, 3))));
    assert_eq!(session.board().peg_count(), 30);

    assert!(history.undo(&mut session));
    assert!(history.undo(&mut session));
    assert_eq!(session.board(), &initial);
    assert!(!history.can_undo());

    assert!(history.redo(&mut session));
    assert!(history.redo(&mut session));
    assert_eq!(session.board().peg_count(), 30);
    assert!(!history.can_redo());
}
