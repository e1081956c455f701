use std::io::ErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::input::PlayerKind;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Player kinds used by a bare `start` command.
    pub default_x_player: String,
    pub default_o_player: String,
    /// Fixed RNG seed; a missing value means a fresh random seed per run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_x_player: "user".to_string(),
            default_o_player: "medium".to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn load(file_path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: Config = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        parse_player(&self.default_x_player)?;
        parse_player(&self.default_o_player)?;
        Ok(())
    }

    pub fn default_players(&self) -> Result<(PlayerKind, PlayerKind), String> {
        Ok((
            parse_player(&self.default_x_player)?,
            parse_player(&self.default_o_player)?,
        ))
    }
}

fn parse_player(value: &str) -> Result<PlayerKind, String> {
    PlayerKind::from_str(value).map_err(|_| format!("Invalid player kind in config: {}", value))
}
