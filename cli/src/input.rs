use std::io::{self, Write};
use std::str::FromStr;

use engine::{Board, Difficulty, Mark, Position};

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    User,
    Bot(Difficulty),
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "user" {
            return Ok(PlayerKind::User);
        }
        Difficulty::from_str(s).map(PlayerKind::Bot)
    }
}

pub enum Command {
    Start {
        x_player: PlayerKind,
        o_player: PlayerKind,
    },
    Exit,
}

/// Prompts until a well-formed command arrives. EOF counts as `exit`.
pub fn read_command(config: &Config) -> Result<Command, String> {
    loop {
        prompt("Input command: ")?;
        let Some(line) = read_line()? else {
            return Ok(Command::Exit);
        };

        match parse_command(&line, config) {
            Ok(command) => return Ok(command),
            Err(message) => println!("{}", message),
        }
    }
}

pub fn parse_command(line: &str, config: &Config) -> Result<Command, String> {
    let parameters: Vec<&str> = line.split_whitespace().collect();

    match parameters.as_slice() {
        ["exit", ..] => Ok(Command::Exit),
        ["start"] => {
            let (x_player, o_player) = config.default_players()?;
            Ok(Command::Start { x_player, o_player })
        }
        ["start", x, o] => {
            let x_player = x.parse().map_err(|_| "Bad parameters!".to_string())?;
            let o_player = o.parse().map_err(|_| "Bad parameters!".to_string())?;
            Ok(Command::Start { x_player, o_player })
        }
        _ => Err("Bad parameters!".to_string()),
    }
}

/// Prompts until the user names an empty cell in 1-indexed coordinates.
pub fn read_coordinates(board: &Board) -> Result<Position, String> {
    loop {
        prompt("Enter the coordinates: ")?;
        let Some(line) = read_line()? else {
            return Err("Unexpected end of input".to_string());
        };

        match parse_coordinates(&line, board) {
            Ok(position) => return Ok(position),
            Err(message) => println!("{}", message),
        }
    }
}

pub fn parse_coordinates(line: &str, board: &Board) -> Result<Position, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err("You should enter numbers!".to_string());
    }

    let row: i32 = tokens[0]
        .parse()
        .map_err(|_| "You should enter numbers!".to_string())?;
    let col: i32 = tokens[1]
        .parse()
        .map_err(|_| "You should enter numbers!".to_string())?;

    if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return Err("Coordinates should be from 1 to 3!".to_string());
    }

    let (row, col) = (row as usize, col as usize);
    if board.at(row - 1, col - 1) != Mark::Empty {
        return Err("This cell is occupied! Choose another one!".to_string());
    }

    Ok(Position::new(row, col))
}

fn prompt(text: &str) -> Result<(), String> {
    print!("{}", text);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))
}

fn read_line() -> Result<Option<String>, String> {
    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;

    if bytes == 0 { Ok(None) } else { Ok(Some(line)) }
}
