use crate::board::{BOARD_SIDE, Board};
use crate::types::{GameStatus, Mark, Position};
use crate::win_detector::{check_win, is_full};

/// Turn-taking bookkeeping around a board: whose move it is and whether
/// the game has ended. X always moves first.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places the current side's mark at a 1-indexed (row, column)
    /// position, then updates the game status and switches the turn.
    pub fn place_mark(&mut self, position: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !(1..=BOARD_SIDE).contains(&position.row) || !(1..=BOARD_SIDE).contains(&position.col) {
            return Err(format!(
                "Position ({}, {}) is out of bounds",
                position.row, position.col
            ));
        }

        let cell = position.cell();
        if self.board.cell(cell) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set_cell(cell, self.current_mark);
        self.last_move = Some(position);

        self.check_game_over();
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.current_mark, Mark::X);

        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));

        state.place_mark(Position::new(2, 2)).unwrap();
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = GameState::new();
        state.place_mark(Position::new(1, 1)).unwrap();
        assert!(state.place_mark(Position::new(1, 1)).is_err());
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut state = GameState::new();
        assert!(state.place_mark(Position::new(0, 1)).is_err());
        assert!(state.place_mark(Position::new(1, 4)).is_err());
    }

    #[test]
    fn test_row_win_ends_the_game() {
        let mut state = GameState::new();
        // X: top row. O: middle row.
        for position in [
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(1, 2),
            Position::new(2, 2),
            Position::new(1, 3),
        ] {
            state.place_mark(position).unwrap();
        }

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        assert!(state.place_mark(Position::new(3, 3)).is_err());
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut state = GameState::new();
        // X X O / O O X / X X O, filled in alternating turn order.
        for position in [
            Position::new(1, 1),
            Position::new(1, 3),
            Position::new(1, 2),
            Position::new(2, 1),
            Position::new(2, 3),
            Position::new(2, 2),
            Position::new(3, 1),
            Position::new(3, 3),
            Position::new(3, 2),
        ] {
            state.place_mark(position).unwrap();
        }

        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
    }
}
