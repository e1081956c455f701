use engine::{BOARD_SIDE, Board, Mark};

pub fn print_table(board: &Board) {
    println!("{}", format_table(board));
}

pub fn format_table(board: &Board) -> String {
    let mut output = String::from("---------\n");

    for row in 0..BOARD_SIDE {
        output.push_str("| ");
        for col in 0..BOARD_SIDE {
            output.push(symbol(board.at(row, col)));
            output.push(' ');
        }
        output.push_str("|\n");
    }

    output.push_str("---------");
    output
}

fn symbol(mark: Mark) -> char {
    match mark {
        Mark::Empty => ' ',
        Mark::X => 'X',
        Mark::O => 'O',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_frame() {
        let expected = "---------\n\
                        |       |\n\
                        |       |\n\
                        |       |\n\
                        ---------";
        assert_eq!(format_table(&Board::new()), expected);
    }

    #[test]
    fn test_marks_are_rendered_in_place() {
        let board = Board::from_rows([[X, E, O], [E, X, E], [O, E, X]]);
        let expected = "---------\n\
                        | X   O |\n\
                        |   X   |\n\
                        | O   X |\n\
                        ---------";
        assert_eq!(format_table(&board), expected);
    }
}
