use ggez::graphics::{self, Color, DrawMode, DrawParam, Rect};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::config::Settings;
use crate::game::{Cell, GameState};

// Colors
const BACKGROUND_COLOR: Color = Color::new(0.1, 0.1, 0.15, 1.0);
const APPLE_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const TEXT_COLOR: Color = Color::WHITE;
const BANNER_COLOR: Color = Color::YELLOW;

const HUD_SCALE: f32 = 18.0;
const BANNER_SCALE: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteShape {
    Square,
    Round,
}

/// One filled grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Color,
    pub shape: SpriteShape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point2<f32>,
    pub scale: f32,
    pub color: Color,
}

/// Everything one draw pass puts on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Color,
    pub sprites: Vec<Sprite>,
    pub labels: Vec<Label>,
}

impl Frame {
    pub fn has_label(&self, text: &str) -> bool {
        self.labels.iter().any(|label| label.text == text)
    }
}

/// Turns a game snapshot into a [`Frame`] and paints frames with ggez.
pub struct Renderer {
    unit: f32,
    width: f32,
    height: f32,
}

impl Renderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            unit: settings.unit_size as f32,
            width: settings.width as f32,
            height: settings.height as f32,
        }
    }

    fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            cell.x as f32 * self.unit,
            cell.y as f32 * self.unit,
            self.unit,
            self.unit,
        )
    }

    fn label(&self, text: String, x: f32, y: f32, scale: f32, color: Color) -> Label {
        Label {
            text,
            position: Point2 { x, y },
            scale,
            color,
        }
    }

    /// Lay out the frame for `state`. Reads only.
    pub fn compose(&self, state: &GameState) -> Frame {
        let mut frame = Frame {
            background: BACKGROUND_COLOR,
            sprites: Vec::new(),
            labels: Vec::new(),
        };
        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;

        if !state.is_running() {
            frame.labels.push(self.label(
                "GAME OVER".to_string(),
                center_x - 60.0,
                center_y - 20.0,
                BANNER_SCALE,
                TEXT_COLOR,
            ));
            frame.labels.push(self.label(
                "Press SPACE to restart".to_string(),
                center_x - 110.0,
                center_y + 10.0,
                HUD_SCALE,
                BANNER_COLOR,
            ));
            return frame;
        }

        // Snake with gradient effect, head darkest
        let len = state.len() as f32;
        for (i, &cell) in state.snake().iter().enumerate() {
            let progress = i as f32 / len;
            frame.sprites.push(Sprite {
                rect: self.cell_rect(cell),
                color: Color::new(0.0, 0.8 + progress * 0.2, 0.0, 1.0),
                shape: SpriteShape::Square,
            });
        }

        frame.sprites.push(Sprite {
            rect: self.cell_rect(state.apple()),
            color: APPLE_COLOR,
            shape: SpriteShape::Round,
        });

        frame.labels.push(self.label(
            format!("Score: {}", state.score()),
            10.0,
            10.0,
            HUD_SCALE,
            TEXT_COLOR,
        ));
        frame.labels.push(self.label(
            format!("Length: {}", state.len()),
            10.0,
            30.0,
            HUD_SCALE,
            TEXT_COLOR,
        ));

        if state.is_paused() {
            frame.labels.push(self.label(
                "PAUSED".to_string(),
                center_x - 40.0,
                center_y - 20.0,
                BANNER_SCALE,
                BANNER_COLOR,
            ));
            frame.labels.push(self.label(
                "Press SPACE to resume".to_string(),
                center_x - 105.0,
                center_y + 10.0,
                HUD_SCALE,
                TEXT_COLOR,
            ));
        }

        frame
    }

    pub fn paint(&self, ctx: &mut Context, frame: &Frame) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, frame.background);

        // All cells go into one mesh; an empty builder can't be uploaded.
        if !frame.sprites.is_empty() {
            let mut builder = graphics::MeshBuilder::new();
            for sprite in &frame.sprites {
                match sprite.shape {
                    SpriteShape::Square => {
                        builder.rectangle(DrawMode::fill(), sprite.rect, sprite.color)?;
                    }
                    SpriteShape::Round => {
                        let center = Point2 {
                            x: sprite.rect.x + sprite.rect.w / 2.0,
                            y: sprite.rect.y + sprite.rect.h / 2.0,
                        };
                        builder.circle(
                            DrawMode::fill(),
                            center,
                            sprite.rect.w / 2.0,
                            0.1,
                            sprite.color,
                        )?;
                    }
                }
            }
            let mesh = graphics::Mesh::from_data(ctx, builder.build());
            canvas.draw(&mesh, DrawParam::default());
        }

        for label in &frame.labels {
            let mut text = graphics::Text::new(label.text.as_str());
            text.set_scale(label.scale);
            canvas.draw(
                &text,
                DrawParam::default().dest(label.position).color(label.color),
            );
        }

        canvas.finish(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Direction};

    fn renderer() -> Renderer {
        Renderer::new(&Settings::default())
    }

    #[test]
    fn test_running_frame() {
        let state = GameState::with_snake(
            Board::default(),
            vec![Cell::new(3, 4), Cell::new(2, 4)],
            Direction::Right,
            Cell::new(10, 12),
        );

        let frame = renderer().compose(&state);

        assert_eq!(frame.sprites.len(), 3);
        assert_eq!(frame.sprites[0].rect, Rect::new(30.0, 40.0, 10.0, 10.0));
        assert_eq!(frame.sprites[0].shape, SpriteShape::Square);

        let apple = frame.sprites.last().unwrap();
        assert_eq!(apple.shape, SpriteShape::Round);
        assert_eq!(apple.rect, Rect::new(100.0, 120.0, 10.0, 10.0));

        assert!(frame.has_label("Score: 0"));
        assert!(frame.has_label("Length: 2"));
        assert!(!frame.has_label("PAUSED"));
        assert!(!frame.has_label("GAME OVER"));
    }

    #[test]
    fn test_paused_frame() {
        let mut state = GameState::new(Board::default(), Some(11));
        state.toggle_pause();

        let frame = renderer().compose(&state);

        assert!(frame.has_label("PAUSED"));
        assert!(frame.has_label("Score: 0"));
        assert_eq!(frame.sprites.len(), 2);
    }

    #[test]
    fn test_game_over_frame() {
        let mut state = GameState::with_snake(
            Board::default(),
            vec![Cell::new(0, 0)],
            Direction::Left,
            Cell::new(9, 9),
        );
        state.advance();

        let frame = renderer().compose(&state);

        assert!(frame.sprites.is_empty());
        assert!(frame.has_label("GAME OVER"));
        assert!(frame.has_label("Press SPACE to restart"));
        assert!(!frame.has_label("Score: 0"));
    }

    #[test]
    fn test_compose_does_not_mutate() {
        let state = GameState::new(Board::default(), Some(3));
        let before = state.snake().clone();
        let apple = state.apple();

        let renderer = renderer();
        assert_eq!(renderer.compose(&state), renderer.compose(&state));
        assert_eq!(state.snake(), &before);
        assert_eq!(state.apple(), apple);
    }
}
