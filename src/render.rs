use crate::state::{Outcome, Snapshot};

pub const WALL_CHAR: char = '#';
pub const FOOD_CHAR: char = '@';
pub const SNAKE_BODY_CHAR: char = 'O';
pub const EMPTY_CHAR: char = ' ';

pub const CONTROLS_LINE: &str = "Controls: W A S D | X to quit";

/// A full screen worth of text, one entry per terminal row.
pub type Frame = Vec<String>;

pub fn render(snap: &Snapshot) -> Frame {
    let board = snap.board;
    let head = snap.snake.head();
    let mut frame = Vec::with_capacity(board.height() as usize + 2);

    frame.push(format!("RETRO SNAKE | Score: {}", snap.score));

    for y in 0..board.height() {
        let row = (0..board.width())
            .map(|x| {
                let cell = (x, y);
                if board.is_wall(cell) {
                    WALL_CHAR
                } else if cell == snap.food {
                    FOOD_CHAR
                } else if cell == head {
                    snap.direction.head_char()
                } else if snap.snake.contains(cell) {
                    SNAKE_BODY_CHAR
                } else {
                    EMPTY_CHAR
                }
            })
            .collect();
        frame.push(row);
    }

    frame.push(CONTROLS_LINE.to_string());
    frame
}

pub fn game_over_banner(score: u32, outcome: Outcome) -> Frame {
    let rule = "=".repeat(28);
    vec![
        rule.clone(),
        "       GAME OVER!".to_string(),
        format!("       {}", outcome.describe()),
        format!("       Final Score: {}", score),
        rule,
    ]
}

pub fn intro_lines() -> [&'static str; 9] {
    [
        "RETRO SNAKE",
        "",
        "Walls are #, touching them ends the game.",
        "Food is @, each one is worth 10 points.",
        "The snake is O, its head points where it goes.",
        "W A S D or the arrow keys to steer.",
        "X or Ctrl+C to quit.",
        "",
        "Press any key to begin",
    ]
}
