use crate::board::{Board, WINNING_LINES};
use crate::rng::GameRng;
use crate::types::{Difficulty, Mark, Position};
use crate::win_detector::has_won;

/// Picks a move for `mark` on `board` at the requested difficulty and
/// returns it in 1-indexed (row, column) coordinates. The board is taken
/// as a snapshot and never modified; the caller applies the move.
///
/// Panics if `mark` is `Empty` or the board has no empty cell. Both are
/// caller bugs, not recoverable conditions.
pub fn calculate_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Position {
    if mark == Mark::Empty {
        panic!("bot mark must be X or O");
    }
    if board.empty_cells().is_empty() {
        panic!("cannot calculate a move on a full board");
    }

    let cell = match difficulty {
        Difficulty::Easy => calculate_random_cell(board, rng),
        Difficulty::Medium => calculate_heuristic_cell(board, mark, rng),
        Difficulty::Hard => calculate_minimax_cell(board, mark),
    };

    Position::from_cell(cell)
}

fn calculate_random_cell(board: &Board, rng: &mut GameRng) -> usize {
    let empty_cells = board.empty_cells();
    empty_cells[rng.random_range(0..empty_cells.len())]
}

/// One-ply lookahead: complete an own line if possible, otherwise block
/// an opponent line, otherwise fall back to a random cell.
fn calculate_heuristic_cell(board: &Board, mark: Mark, rng: &mut GameRng) -> usize {
    let mut winning_cell = None;
    let mut blocking_cell = None;

    for line in WINNING_LINES {
        for slot in 0..line.len() {
            if board.cell(line[slot]) != Mark::Empty {
                continue;
            }

            let second = board.cell(line[(slot + 1) % 3]);
            let third = board.cell(line[(slot + 2) % 3]);
            if second == Mark::Empty || second != third {
                continue;
            }

            // When several lines match, the one scanned last wins.
            // Inherited tie-break; callers rely on it staying stable.
            if second == mark {
                winning_cell = Some(line[slot]);
            } else {
                blocking_cell = Some(line[slot]);
            }
        }
    }

    winning_cell
        .or(blocking_cell)
        .unwrap_or_else(|| calculate_random_cell(board, rng))
}

struct ScoredMove {
    cell: Option<usize>,
    score: i32,
}

fn calculate_minimax_cell(board: &Board, mark: Mark) -> usize {
    let opponent = mark.opponent().unwrap();
    let mut working = *board;

    minimax(&mut working, mark, mark, opponent)
        .cell
        .expect("minimax requested on a terminal position")
}

/// Exhaustive search over the remaining game tree. `turn` is the side
/// placing a mark at this level; `ai` and `opponent` stay fixed for the
/// whole tree. Terminal scores are +10 / -10 / 0 from `ai`'s perspective.
fn minimax(board: &mut Board, turn: Mark, ai: Mark, opponent: Mark) -> ScoredMove {
    if has_won(board, ai) {
        return ScoredMove {
            cell: None,
            score: 10,
        };
    }
    if has_won(board, opponent) {
        return ScoredMove {
            cell: None,
            score: -10,
        };
    }

    let empty_cells = board.empty_cells();
    if empty_cells.is_empty() {
        return ScoredMove {
            cell: None,
            score: 0,
        };
    }

    let next_turn = if turn == ai { opponent } else { ai };
    let mut best_cell = None;
    let mut best_score = if turn == ai { i32::MIN } else { i32::MAX };

    for cell in empty_cells {
        board.set_cell(cell, turn);
        let result = minimax(board, next_turn, ai, opponent);
        board.set_cell(cell, Mark::Empty);

        // Strict comparison: among equal scores the earliest candidate in
        // row-major order is kept.
        let better = if turn == ai {
            result.score > best_score
        } else {
            result.score < best_score
        };
        if better {
            best_score = result.score;
            best_cell = Some(cell);
        }
    }

    ScoredMove {
        cell: best_cell,
        score: best_score,
    }
}
