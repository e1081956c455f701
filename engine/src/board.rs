use crate::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The eight winning triples of row-major cell indices:
/// three rows, three columns, two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board stored as a flat row-major array. Pure data: the board
/// never applies game rules itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_rows(rows: [[Mark; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        let mut board = Self::new();
        for (row, marks) in rows.iter().enumerate() {
            for (col, &mark) in marks.iter().enumerate() {
                board.cells[row * BOARD_SIDE + col] = mark;
            }
        }
        board
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn set_cell(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Cell at 0-indexed (row, col).
    pub fn at(&self, row: usize, col: usize) -> Mark {
        self.cells[row * BOARD_SIDE + col]
    }

    pub fn set_at(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row * BOARD_SIDE + col] = mark;
    }

    /// Indices of empty cells, in row-major order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
    }

    #[test]
    fn test_from_rows_matches_indexing() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [E, E, O]]);
        assert_eq!(board.cell(0), X);
        assert_eq!(board.cell(2), O);
        assert_eq!(board.at(1, 1), X);
        assert_eq!(board.at(2, 2), O);
    }

    #[test]
    fn test_empty_cells_are_row_major() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [E, E, O]]);
        assert_eq!(board.empty_cells(), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_set_cell_round_trip() {
        let mut board = Board::new();
        board.set_cell(4, X);
        board.set_at(0, 2, O);
        assert_eq!(board.at(1, 1), X);
        assert_eq!(board.cell(2), O);
    }
}
