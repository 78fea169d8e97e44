use std::collections::VecDeque;

use log::warn;
use rand::Rng;

use super::board::Board;
use super::cell::Cell;

/// True if `candidate` keeps the board's minimum distance from every snake cell.
pub fn is_clear_of(board: &Board, snake: &VecDeque<Cell>, candidate: Cell) -> bool {
    let min = board.min_apple_distance;
    snake
        .iter()
        .all(|cell| (cell.distance_sq(candidate) as f64) >= min * min)
}

/// Pick a new apple cell.
///
/// Samples uniformly up to `apple_retry_limit` times. When sampling runs out
/// it scans the board for the first cell far enough from the snake, then for
/// any cell the snake does not cover. On a full board `current` is kept.
pub fn place_apple<R: Rng>(
    board: &Board,
    snake: &VecDeque<Cell>,
    current: Cell,
    rng: &mut R,
) -> Cell {
    for _ in 0..board.apple_retry_limit {
        let candidate = Cell::new(
            rng.gen_range(0..board.columns),
            rng.gen_range(0..board.rows),
        );
        if is_clear_of(board, snake, candidate) {
            return candidate;
        }
    }

    if let Some(cell) = board.cells().find(|&cell| is_clear_of(board, snake, cell)) {
        warn!(
            "apple sampling exhausted after {} tries, placed by scan at ({}, {})",
            board.apple_retry_limit, cell.x, cell.y
        );
        return cell;
    }

    if let Some(cell) = board.cells().find(|cell| !snake.contains(cell)) {
        warn!(
            "no cell keeps distance {} from the snake, placing apple at ({}, {})",
            board.min_apple_distance, cell.x, cell.y
        );
        return cell;
    }

    // Board-full is not a win state; the apple may end up under the head.
    warn!(
        "board is full, apple stays at ({}, {})",
        current.x,
        current.y
    );
    current
}
