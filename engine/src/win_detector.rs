use crate::board::{Board, CELL_COUNT, WINNING_LINES};
use crate::types::Mark;

/// True iff `mark` fully occupies one of the eight winning lines.
/// `Mark::Empty` never wins.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.cell(cell) == mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    for line in WINNING_LINES {
        let first = board.cell(line[0]);
        if first != Mark::Empty && line.iter().all(|&cell| board.cell(cell) == first) {
            return Some(first);
        }
    }

    None
}

pub fn is_full(board: &Board) -> bool {
    (0..CELL_COUNT).all(|index| board.cell(index) != Mark::Empty)
}
