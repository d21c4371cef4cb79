use std::{thread::sleep, time::Duration};

use anyhow::Result;
use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::input::{self, Command};
use crate::render::{self, Frame};
use crate::state::{GameState, Outcome, Status};
use crate::term::TermManager;

/// Pauses between bells of the game-over jingle.
const GAME_OVER_JINGLE_MS: [u64; 4] = [200, 200, 200, 600];
const GAME_OVER_LINGER_MS: u64 = 1500;

pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(SnakeGame { config, term: TermManager::new()? })
    }

    pub fn initialize(&mut self, state: &GameState) -> Result<()> {
        let frame = render::render(&state.snapshot());
        let cols = frame.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        self.term.ensure_fits(cols, frame.len())?;

        self.term.setup()?;
        self.term.clear()
    }

    /// Returns false if the player chose to quit from the intro.
    pub fn show_intro(&mut self) -> Result<bool> {
        self.term.show_message(&render::intro_lines())?;

        let key = self.term.read_key_blocking()?;
        if matches!(input::command_for_key(&key), Some(Command::Quit)) {
            return Ok(false);
        }

        self.term.clear()?;
        Ok(true)
    }

    pub fn play<R: Rng>(&mut self, state: &mut GameState, rng: &mut R) -> Result<Outcome> {
        info!("game started, food at {:?}", state.food());
        self.draw(&render::render(&state.snapshot()))?;

        loop {
            let command = input::poll_command()?;
            let report = state.tick(command, rng);

            self.draw(&render::render(&state.snapshot()))?;

            if report.ate {
                info!("score {}", state.score());
                if self.config.sound {
                    self.term.beep()?;
                }
            }

            if let Status::Over(outcome) = report.status {
                return Ok(outcome);
            }

            sleep(self.config.tick_interval(state.score()));
        }
    }

    pub fn game_over(&mut self, score: u32, outcome: Outcome) -> Result<Frame> {
        if self.config.sound {
            for pause in GAME_OVER_JINGLE_MS {
                self.term.beep()?;
                sleep(Duration::from_millis(pause));
            }
        }

        let banner = render::game_over_banner(score, outcome);
        let lines: Vec<&str> = banner.iter().map(String::as_str).collect();
        self.term.show_message(&lines)?;
        if outcome != Outcome::Quit {
            sleep(Duration::from_millis(GAME_OVER_LINGER_MS));
        }

        self.term.restore()?;
        Ok(banner)
    }

    pub fn shutdown(&mut self) -> Result<()> {
        self.term.restore()
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.term.draw_frame(frame)
    }
}
