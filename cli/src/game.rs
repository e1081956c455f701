use engine::{GameRng, GameState, GameStatus, Mark, calculate_move, log};

use crate::input::{self, PlayerKind};
use crate::render;

/// Plays one game to completion, prompting the user for their turns and
/// announcing each bot move before it is applied.
pub fn run(x_player: PlayerKind, o_player: PlayerKind, rng: &mut GameRng) -> Result<(), String> {
    let mut state = GameState::new();
    render::print_table(&state.board);

    while state.status == GameStatus::InProgress {
        let kind = if state.current_mark == Mark::X {
            x_player
        } else {
            o_player
        };
        let mark = state.current_mark;

        let position = match kind {
            PlayerKind::User => input::read_coordinates(&state.board)?,
            PlayerKind::Bot(difficulty) => {
                println!("Making move level \"{}\"", difficulty);
                calculate_move(&state.board, mark, difficulty, rng)
            }
        };

        state.place_mark(position)?;
        log!("{:?} placed at ({}, {})", mark, position.row, position.col);

        render::print_table(&state.board);
    }

    let message = result_message(state.status);
    println!("{}", message);
    log!("Game finished: {}", message);

    Ok(())
}

fn result_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::XWon => "X wins",
        GameStatus::OWon => "O wins",
        GameStatus::Draw => "Draw",
        GameStatus::InProgress => unreachable!("game still in progress"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_messages() {
        assert_eq!(result_message(GameStatus::XWon), "X wins");
        assert_eq!(result_message(GameStatus::OWon), "O wins");
        assert_eq!(result_message(GameStatus::Draw), "Draw");
    }
}
