pub mod logger;

mod board;
mod bot_controller;
mod game_state;
mod rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, WINNING_LINES};
pub use bot_controller::calculate_move;
pub use game_state::GameState;
pub use rng::GameRng;
pub use types::{Difficulty, GameStatus, Mark, Position};
pub use win_detector::{check_win, has_won, is_full};
