use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};
use log::{debug, info};

use crate::config::Settings;
use crate::game::{Collision, GameState, TickOutcome};
use crate::input::{InputEffect, InputHandler};
use crate::render::Renderer;
use crate::tick::TickScheduler;

/// The running application. ggez calls update, draw and the key callbacks
/// one after another on the event loop thread, so the game state is never
/// seen half-updated.
pub struct SnakeApp {
    state: GameState,
    scheduler: TickScheduler,
    input: InputHandler,
    renderer: Renderer,
    high_score: u32,
}

impl SnakeApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings.board(), settings.seed),
            scheduler: TickScheduler::new(settings.tick_period(), settings.max_catch_up_ticks),
            input: InputHandler::new(),
            renderer: Renderer::new(settings),
            high_score: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn record(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::AteApple => {
                debug!(
                    "apple eaten, score {} length {}",
                    self.state.score(),
                    self.state.len()
                );
            }
            TickOutcome::Collided(collision) => {
                let cause = match collision {
                    Collision::SelfCollision => "ran into itself",
                    Collision::Wall => "hit the wall",
                };
                self.high_score = self.high_score.max(self.state.score());
                info!(
                    "game over: snake {} with score {} and length {} (best {})",
                    cause,
                    self.state.score(),
                    self.state.len(),
                    self.high_score
                );
            }
            TickOutcome::Moved | TickOutcome::Idle => {}
        }
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let outcomes = self.scheduler.update(ctx.time.delta(), &mut self.state);
        for outcome in outcomes {
            self.record(outcome);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let frame = self.renderer.compose(&self.state);
        self.renderer.paint(ctx, &frame)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeat: bool) -> GameResult {
        let Some(keycode) = input.keycode else {
            return Ok(());
        };

        let action = self.input.handle_key(keycode, repeat);
        match self.input.apply(action, &mut self.state) {
            InputEffect::Paused => info!("paused"),
            InputEffect::Resumed => {
                self.scheduler.reset();
                info!("resumed");
            }
            InputEffect::Restarted => {
                self.scheduler.reset();
                info!("new game started");
            }
            InputEffect::Quit => {
                info!("quit requested");
                ctx.request_quit();
            }
            InputEffect::Steered(direction) => debug!("heading {:?}", direction),
            InputEffect::Ignored => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction};

    #[test]
    fn test_app_initialization() {
        let settings = Settings {
            seed: Some(21),
            ..Default::default()
        };
        let app = SnakeApp::new(&settings);

        assert!(app.state().is_running());
        assert_eq!(app.state().score(), 0);
        assert_eq!(app.state().board().columns, 60);
        assert_eq!(app.scheduler.period(), settings.tick_period());
    }

    #[test]
    fn test_game_over_tracks_best_score() {
        let mut app = SnakeApp::new(&Settings::default());
        app.state = GameState::with_snake(
            app.state.board().clone(),
            vec![Cell::new(58, 0)],
            Direction::Right,
            Cell::new(59, 0),
        );

        for expected in [
            TickOutcome::AteApple,
            TickOutcome::Collided(Collision::Wall),
        ] {
            let outcome = app.state.advance();
            assert_eq!(outcome, expected);
            app.record(outcome);
        }

        assert_eq!(app.high_score, 1);
        assert!(!app.state().is_running());
    }
}
