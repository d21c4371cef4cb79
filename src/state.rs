use log::{debug, info};
use rand::Rng;

use crate::Cell;
use crate::board::Board;
use crate::food;
use crate::input::Command;
use crate::snake::{Direction, Snake};

pub const FOOD_REWARD: u32 = 10;
pub const STARTING_SNAKE: [Cell; 3] = [(10, 10), (10, 11), (10, 12)];
pub const STARTING_DIRECTION: Direction = Direction::Up;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over(Outcome),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    HitWall,
    HitSelf,
    BoardFull,
}

impl Outcome {
    pub fn describe(self) -> &'static str {
        match self {
            Outcome::Quit => "You quit.",
            Outcome::HitWall => "You hit the wall.",
            Outcome::HitSelf => "You bit yourself.",
            Outcome::BoardFull => "You filled the board!",
        }
    }
}

/// What a single tick did, for the controller's side effects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub ate: bool,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    snake: Snake,
    direction: Direction,
    food: Cell,
    score: u32,
    status: Status,
}

/// Read-only view handed to the renderer.
#[derive(Copy, Clone)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub snake: &'a Snake,
    pub direction: Direction,
    pub food: Cell,
    pub score: u32,
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let board = Board::default();
        let snake = Snake::new(STARTING_SNAKE);
        let food = food::place(&board, |c| snake.contains(c), rng)
            .expect("the starting snake leaves the board mostly empty");

        Self::with_parts(board, snake, STARTING_DIRECTION, food)
    }

    pub fn with_parts(board: Board, snake: Snake, direction: Direction, food: Cell) -> Self {
        GameState { board, snake, direction, food, score: 0, status: Status::Running }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            snake: &self.snake,
            direction: self.direction,
            food: self.food,
            score: self.score,
        }
    }

    /// Ignores a turn straight back into the neck.
    pub fn turn(&mut self, dir: Direction) {
        if !dir.is_opposite(self.direction) {
            self.direction = dir;
        }
    }

    pub fn tick<R: Rng>(&mut self, command: Option<Command>, rng: &mut R) -> TickReport {
        if self.is_over() {
            return TickReport { ate: false, status: self.status };
        }

        match command {
            Some(Command::Quit) => return self.finish(Outcome::Quit, false),
            Some(Command::Turn(dir)) => self.turn(dir),
            None => {}
        }

        let next_head = self.snake.peek_next_head(self.direction);
        let eating = next_head == self.food;
        if eating {
            self.score += FOOD_REWARD;
            debug!("ate food at {:?}, score {}", next_head, self.score);
        }

        self.snake.advance(next_head, eating);

        let head = self.snake.head();
        if !self.board.is_interior(head) {
            return self.finish(Outcome::HitWall, eating);
        }
        if self.snake.collides_with_self(head) {
            return self.finish(Outcome::HitSelf, eating);
        }

        if eating {
            let snake = &self.snake;
            match food::place(&self.board, |c| snake.contains(c), rng) {
                Some(cell) => {
                    debug!("food placed at {:?}", cell);
                    self.food = cell;
                }
                None => return self.finish(Outcome::BoardFull, eating),
            }
        }

        TickReport { ate: eating, status: self.status }
    }

    fn finish(&mut self, outcome: Outcome, ate: bool) -> TickReport {
        info!("game over: {:?}, score {}, length {}", outcome, self.score, self.snake.len());
        self.status = Status::Over(outcome);
        TickReport { ate, status: self.status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn state(cells: &[Cell], dir: Direction, food: Cell) -> GameState {
        GameState::with_parts(Board::default(), Snake::new(cells.iter().copied()), dir, food)
    }

    fn body(state: &GameState) -> Vec<Cell> {
        state.snake().body().collect()
    }

    #[test]
    fn new_game_matches_starting_layout() {
        let state = GameState::new(&mut rng());
        assert_eq!(body(&state), STARTING_SNAKE.to_vec());
        assert_eq!(state.direction(), Up);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), Status::Running);
        assert!(!state.snake().contains(state.food()));
    }

    #[test]
    fn eating_grows_scores_and_moves_food() {
        let mut state = state(&STARTING_SNAKE, Up, (10, 9));
        let report = state.tick(None, &mut rng());

        assert!(report.ate);
        assert_eq!(report.status, Status::Running);
        assert_eq!(body(&state), vec![(10, 9), (10, 10), (10, 11), (10, 12)]);
        assert_eq!(state.score(), FOOD_REWARD);
        assert_ne!(state.food(), (10, 9));
        assert!(!state.snake().contains(state.food()));
        assert!(Board::default().is_interior(state.food()));
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut state = state(&STARTING_SNAKE, Up, (3, 3));
        let report = state.tick(None, &mut rng());

        assert!(!report.ate);
        assert_eq!(body(&state), vec![(10, 9), (10, 10), (10, 11)]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.food(), (3, 3));
    }

    #[test]
    fn moving_next_to_wall_is_fine() {
        let mut state = state(&[(1, 5), (1, 6), (1, 7)], Up, (10, 10));
        state.tick(None, &mut rng());
        assert_eq!(state.snake().head(), (1, 4));
        assert_eq!(state.status(), Status::Running);
    }

    #[test]
    fn moving_into_top_wall_ends_game() {
        let mut state = state(&[(1, 1), (1, 2), (1, 3)], Up, (10, 10));
        let report = state.tick(None, &mut rng());
        assert_eq!(report.status, Status::Over(Outcome::HitWall));
        assert!(state.is_over());
    }

    #[test]
    fn biting_body_ends_game() {
        // Heading down from (6,5) lands on (6,6), which isn't the tail.
        let cells = [(6, 5), (5, 5), (5, 6), (5, 7), (6, 7), (6, 6), (7, 6)];
        let mut state = state(&cells, Down, (10, 10));
        let report = state.tick(None, &mut rng());
        assert_eq!(report.status, Status::Over(Outcome::HitSelf));
    }

    #[test]
    fn chasing_own_tail_is_allowed() {
        let cells = [(6, 5), (5, 5), (5, 6), (5, 7), (6, 7), (6, 6)];
        let mut state = state(&cells, Down, (10, 10));
        let report = state.tick(None, &mut rng());
        assert_eq!(report.status, Status::Running);
        assert_eq!(state.snake().head(), (6, 6));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut state = state(&STARTING_SNAKE, Up, (3, 3));
        state.turn(Down);
        assert_eq!(state.direction(), Up);

        state.tick(Some(Command::Turn(Down)), &mut rng());
        assert_eq!(state.direction(), Up);
        assert_eq!(state.snake().head(), (10, 9));
        assert_eq!(state.status(), Status::Running);
    }

    #[test]
    fn turn_applies_before_moving() {
        let mut state = state(&STARTING_SNAKE, Up, (3, 3));
        state.tick(Some(Command::Turn(Left)), &mut rng());
        assert_eq!(state.direction(), Left);
        assert_eq!(state.snake().head(), (9, 10));
    }

    #[test]
    fn quit_ends_game_without_moving() {
        let mut state = state(&STARTING_SNAKE, Up, (10, 9));
        let report = state.tick(Some(Command::Quit), &mut rng());
        assert_eq!(report.status, Status::Over(Outcome::Quit));
        assert_eq!(body(&state), STARTING_SNAKE.to_vec());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn nothing_changes_after_game_over() {
        let mut state = state(&[(1, 1), (1, 2), (1, 3)], Up, (10, 10));
        state.tick(None, &mut rng());
        assert!(state.is_over());

        let snake_before = body(&state);
        let food_before = state.food();
        let score_before = state.score();

        for command in [None, Some(Command::Turn(Right)), Some(Command::Quit)] {
            let report = state.tick(command, &mut rng());
            assert!(!report.ate);
            assert_eq!(report.status, Status::Over(Outcome::HitWall));
        }
        assert_eq!(body(&state), snake_before);
        assert_eq!(state.food(), food_before);
        assert_eq!(state.score(), score_before);
        assert_eq!(state.direction(), Up);
    }

    #[test]
    fn filling_the_board_ends_game() {
        // 3x1 interior: snake covers two cells, food the third.
        let board = Board::new(5, 3);
        let mut state = GameState::with_parts(board, Snake::new([(2, 1), (1, 1)]), Right, (3, 1));
        let report = state.tick(None, &mut rng());
        assert!(report.ate);
        assert_eq!(report.status, Status::Over(Outcome::BoardFull));
        assert_eq!(state.snake().len(), 3);
    }
}
