use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::apple::place_apple;
use super::board::Board;
use super::cell::{Cell, Direction};

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head ran into the snake's own body
    SelfCollision,
    /// Head left the board
    Wall,
}

/// What a single call to [`GameState::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game over or paused, nothing changed.
    Idle,
    Moved,
    AteApple,
    Collided(Collision),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Body segments, head at the front
    snake: VecDeque<Cell>,
    apple: Cell,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    running: bool,
    paused: bool,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Start a game with a single-cell snake in the middle of `board`.
    pub fn new(board: Board, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let head = board.center();

        let mut state = Self {
            snake: VecDeque::from([head]),
            apple: head,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            running: true,
            paused: false,
            board,
            rng,
        };
        state.respawn_apple();
        state
    }

    /// Build a running game from an explicit body (head first), heading and
    /// apple. An empty body is replaced by the board centre.
    pub fn with_snake<I>(board: Board, body: I, direction: Direction, apple: Cell) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut snake: VecDeque<Cell> = body.into_iter().collect();
        if snake.is_empty() {
            snake.push_back(board.center());
        }

        Self {
            snake,
            apple,
            direction,
            pending_direction: direction,
            score: 0,
            running: true,
            paused: false,
            board,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Reset to a fresh game on the same board. The RNG keeps its sequence.
    pub fn restart(&mut self) {
        let head = self.board.center();
        self.snake.clear();
        self.snake.push_back(head);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.running = true;
        self.paused = false;
        self.respawn_apple();
    }

    /// Queue a turn for the next tick. Reversing onto the committed direction
    /// is rejected and leaves the pending direction alone.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.running || self.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Flip the paused flag while a game is running. Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        if self.running {
            self.paused = !self.paused;
        }
        self.paused
    }

    /// Move the snake one cell.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.is_active() {
            return TickOutcome::Idle;
        }

        self.direction = self.pending_direction;
        let new_head = self.head().step(self.direction);

        if new_head == self.apple {
            self.snake.push_front(new_head);
            self.score += 1;
            self.respawn_apple();
            return TickOutcome::AteApple;
        }

        // The vacated tail cell is free for the head to enter.
        let tail = self.snake.pop_back();
        let collision = if self.snake.iter().skip(1).any(|&cell| cell == new_head) {
            Some(Collision::SelfCollision)
        } else if !self.board.contains(new_head) {
            Some(Collision::Wall)
        } else {
            None
        };

        if let Some(collision) = collision {
            // Leave the body exactly as it was before the fatal move.
            self.snake.extend(tail);
            self.running = false;
            return TickOutcome::Collided(collision);
        }

        self.snake.push_front(new_head);
        TickOutcome::Moved
    }

    fn respawn_apple(&mut self) {
        self.apple = place_apple(&self.board, &self.snake, self.apple, &mut self.rng);
    }

    /// Running and not paused
    pub fn is_active(&self) -> bool {
        self.running && !self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false; a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
