mod board;
mod config;
mod food;
mod game;
mod input;
mod render;
mod snake;
mod state;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::WriteLogger;

use config::{Args, GameConfig};
use state::GameState;

pub type TermInt = u16;
pub type Cell = (i32, i32);

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = GameConfig::from(&args);
    info!("starting with {:?}", config);

    let mut rng = rand::thread_rng();
    let mut state = GameState::new(&mut rng);
    let mut game = game::SnakeGame::new(config)?;

    game.initialize(&state)?;
    if !game.show_intro()? {
        return game.shutdown();
    }

    let outcome = game.play(&mut state, &mut rng)?;
    let banner = game.game_over(state.score(), outcome)?;

    // The alternate screen is gone now, so this stays on the normal screen.
    for line in banner {
        println!("{}", line);
    }

    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(level, simplelog::Config::default(), file).context("installing logger")?;
    Ok(())
}
