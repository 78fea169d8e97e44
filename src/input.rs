use ggez::input::keyboard::KeyCode;

use crate::game::{Direction, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    /// Space: pause/resume a running game, restart a finished one
    PauseOrRestart,
    Quit,
    None,
}

/// What applying a key action did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    Steered(Direction),
    Paused,
    Resumed,
    Restarted,
    Quit,
    Ignored,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, keycode: KeyCode, repeat: bool) -> KeyAction {
        match keycode {
            KeyCode::Up | KeyCode::W => KeyAction::Steer(Direction::Up),
            KeyCode::Down | KeyCode::S => KeyAction::Steer(Direction::Down),
            KeyCode::Left | KeyCode::A => KeyAction::Steer(Direction::Left),
            KeyCode::Right | KeyCode::D => KeyAction::Steer(Direction::Right),

            // Holding space would otherwise flicker between paused and running.
            KeyCode::Space if repeat => KeyAction::None,
            KeyCode::Space => KeyAction::PauseOrRestart,

            KeyCode::Escape => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    pub fn apply(&self, action: KeyAction, state: &mut GameState) -> InputEffect {
        match action {
            KeyAction::Steer(direction) => {
                if state.steer(direction) {
                    InputEffect::Steered(direction)
                } else {
                    InputEffect::Ignored
                }
            }
            KeyAction::PauseOrRestart if !state.is_running() => {
                state.restart();
                InputEffect::Restarted
            }
            KeyAction::PauseOrRestart => {
                if state.toggle_pause() {
                    InputEffect::Paused
                } else {
                    InputEffect::Resumed
                }
            }
            KeyAction::Quit => InputEffect::Quit,
            KeyAction::None => InputEffect::Ignored,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
