mod config;
mod game;
mod input;
mod render;

use clap::Parser;
use engine::{GameRng, log, logger};

use config::Config;
use input::Command;

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    /// Fixed RNG seed; overrides the seed from the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = Config::load(&args.config)?;

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Session RNG seed: {}", rng.seed());

    loop {
        match input::read_command(&config)? {
            Command::Start { x_player, o_player } => game::run(x_player, o_player, &mut rng)?,
            Command::Exit => break,
        }
    }

    Ok(())
}
