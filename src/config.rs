use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const BASE_TICK_MS: u64 = 100;
pub const MIN_TICK_MS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "retro-snake", version, about = "Snake in your terminal")]
pub struct Args {
    /// Ring the terminal bell when food is eaten and when the game ends
    #[arg(long)]
    pub sound: bool,

    /// Speed up as the score grows
    #[arg(long)]
    pub speed_scaling: bool,

    /// Shorthand for --sound --speed-scaling
    #[arg(long)]
    pub intermediate: bool,

    /// Write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level (only with --log-file)
    #[arg(long, requires = "log_file")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub sound: bool,
    pub speed_scaling: bool,
}

impl GameConfig {
    pub fn tick_interval(&self, score: u32) -> Duration {
        let ms = if self.speed_scaling {
            BASE_TICK_MS.saturating_sub(score as u64).max(MIN_TICK_MS)
        } else {
            BASE_TICK_MS
        };
        Duration::from_millis(ms)
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        GameConfig {
            sound: args.sound || args.intermediate,
            speed_scaling: args.speed_scaling || args.intermediate,
        }
    }
}
