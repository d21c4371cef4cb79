use rand::Rng;
use rand::seq::IteratorRandom;

use crate::Cell;
use crate::board::Board;

/// Random draws tried before falling back to scanning the free cells.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Picks a uniformly random interior cell that `occupied` doesn't report.
///
/// Rejection sampling is cheap while the snake is short. Once it keeps
/// missing, the free cells are enumerated and one is drawn from them, so
/// this always terminates. `None` means every interior cell is taken.
pub fn place<R, F>(board: &Board, occupied: F, rng: &mut R) -> Option<Cell>
where
    R: Rng,
    F: Fn(Cell) -> bool,
{
    if board.interior_area() == 0 {
        return None;
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = (
            rng.gen_range(1..board.width() - 1),
            rng.gen_range(1..board.height() - 1),
        );
        if !occupied(cell) {
            return Some(cell);
        }
    }

    board.interior().filter(|&cell| !occupied(cell)).choose(rng)
}
