use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::{error, info};

use grid_pong::{
    config::Config,
    game::{Game, Outcome},
    input::spawn_keyboard_listener,
    surface::{Surface, TerminalSurface},
};

fn init_logging(config: &Config) {
    // The terminal is ours while the game runs, so logs go to a file.
    let log_file = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_path)
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "logging disabled, cannot open {}: {}",
                config.log_path.display(),
                err
            );
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
}

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);
    info!("starting grid-pong with {:?}", config);

    let mut surface = TerminalSurface::init()?;

    let input = match spawn_keyboard_listener() {
        Ok((input, _reader)) => input,
        Err(err) => {
            let _ = surface.shutdown();
            return Err(err).context("failed to start keyboard reader");
        }
    };

    let mut game = Game::new(config, surface, input);
    match game.run() {
        Ok(Outcome::Won(winner)) => {
            info!("game over, {} won", winner);
            Ok(())
        }
        Ok(Outcome::Quit) => {
            info!("player quit");
            Ok(())
        }
        Err(err) => {
            error!("game aborted: {:#}", err);
            Err(err)
        }
    }
}
