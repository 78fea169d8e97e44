use std::time::Duration;

use crate::game::{GameState, TickOutcome};

/// Fixed-period driver for [`GameState::advance`].
///
/// The event loop feeds it frame deltas; it runs one advance per whole
/// period elapsed. Time does not build up while the game is paused or
/// over, so resuming never replays a burst of ticks.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    accumulated: Duration,
    max_catch_up: u32,
}

impl TickScheduler {
    pub fn new(period: Duration, max_catch_up: u32) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Feed `elapsed` frame time and advance `state` for every tick that
    /// became due. Returns the outcomes in order.
    pub fn update(&mut self, elapsed: Duration, state: &mut GameState) -> Vec<TickOutcome> {
        if !state.is_active() {
            self.accumulated = Duration::ZERO;
            return Vec::new();
        }

        self.accumulated += elapsed;
        let mut outcomes = Vec::new();
        while self.accumulated >= self.period {
            if outcomes.len() as u32 == self.max_catch_up {
                // Too far behind; drop the backlog instead of fast-forwarding.
                self.accumulated = Duration::ZERO;
                break;
            }
            self.accumulated -= self.period;
            outcomes.push(state.advance());
            if !state.is_active() {
                self.accumulated = Duration::ZERO;
                break;
            }
        }
        outcomes
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell, Direction};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn open_field() -> GameState {
        GameState::with_snake(
            Board::new(60, 60),
            vec![Cell::new(5, 30)],
            Direction::Right,
            Cell::new(0, 0),
        )
    }

    #[test]
    fn test_ticks_once_per_period() {
        let mut scheduler = TickScheduler::new(ms(100), 5);
        let mut state = open_field();

        assert!(scheduler.update(ms(40), &mut state).is_empty());
        assert!(scheduler.update(ms(40), &mut state).is_empty());
        assert_eq!(scheduler.update(ms(40), &mut state), vec![TickOutcome::Moved]);
        assert_eq!(state.head(), Cell::new(6, 30));

        // 20ms carried over from the last frame.
        assert_eq!(scheduler.update(ms(80), &mut state).len(), 1);
        assert_eq!(state.head(), Cell::new(7, 30));
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut scheduler = TickScheduler::new(ms(100), 3);
        let mut state = open_field();

        assert_eq!(scheduler.update(ms(1000), &mut state).len(), 3);
        assert_eq!(state.head(), Cell::new(8, 30));
        assert!(scheduler.update(ms(50), &mut state).is_empty());
    }

    #[test]
    fn test_no_ticks_while_paused() {
        let mut scheduler = TickScheduler::new(ms(100), 5);
        let mut state = open_field();
        state.toggle_pause();

        assert!(scheduler.update(ms(500), &mut state).is_empty());
        assert_eq!(state.head(), Cell::new(5, 30));

        state.toggle_pause();
        assert!(scheduler.update(ms(50), &mut state).is_empty());
        assert_eq!(scheduler.update(ms(50), &mut state).len(), 1);
    }

    #[test]
    fn test_stops_at_game_over() {
        let mut scheduler = TickScheduler::new(ms(100), 5);
        let mut state = GameState::with_snake(
            Board::new(10, 10),
            vec![Cell::new(8, 0)],
            Direction::Right,
            Cell::new(0, 9),
        );

        let outcomes = scheduler.update(ms(500), &mut state);
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[1], TickOutcome::Collided(_)));
        assert!(!state.is_running());
        assert!(scheduler.update(ms(500), &mut state).is_empty());
    }
}
