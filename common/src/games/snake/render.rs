use crate::log;
use super::error::SnakeError;
use super::game_state::{SnakeGameState, TickOutcome};
use super::orientation::{body_orientation, tail_orientation};
use super::settings::BackgroundColors;
use super::sprite_id::SpriteId;
use super::types::{Cell, FieldSize, Rgb};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// A 2D drawing surface in absolute pixels, origin top-left.
pub trait Canvas {
    type Sprite;

    fn clear_rect(&mut self, rect: PixelRect);
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);
    fn draw_sprite(&mut self, sprite: &Self::Sprite, rect: PixelRect);
}

/// Lookup of loaded sprites. `None` means the sprite is not ready yet.
pub trait SpriteCache {
    type Sprite;

    fn lookup(&self, id: SpriteId) -> Option<&Self::Sprite>;

    fn is_ready(&self, id: SpriteId) -> bool {
        self.lookup(id).is_some()
    }
}

pub struct SnakeRenderer {
    field_size: FieldSize,
    colors: BackgroundColors,
}

impl SnakeRenderer {
    pub fn new(field_size: FieldSize, colors: BackgroundColors) -> Self {
        Self { field_size, colors }
    }

    /// One timer period: clear, background, advance the simulation, then draw
    /// the updated food and snake.
    pub fn repaint<C, S>(&self, state: &mut SnakeGameState, canvas: &mut C, sprites: &S) -> TickOutcome
    where
        C: Canvas,
        S: SpriteCache<Sprite = C::Sprite>,
    {
        self.clear(canvas);
        self.draw_background(canvas);
        let outcome = state.tick();
        self.draw_food(state, canvas, sprites);
        if let Err(err) = self.draw_snake(state, canvas, sprites) {
            log!("Snake not drawn: {}", err);
        }
        outcome
    }

    /// Redraws the current state without advancing it.
    pub fn draw_frame<C, S>(&self, state: &SnakeGameState, canvas: &mut C, sprites: &S)
    where
        C: Canvas,
        S: SpriteCache<Sprite = C::Sprite>,
    {
        self.clear(canvas);
        self.draw_background(canvas);
        self.draw_food(state, canvas, sprites);
        if let Err(err) = self.draw_snake(state, canvas, sprites) {
            log!("Snake not drawn: {}", err);
        }
    }

    pub fn clear<C: Canvas>(&self, canvas: &mut C) {
        canvas.clear_rect(PixelRect::new(
            0.0,
            0.0,
            self.field_size.width as f32,
            self.field_size.height as f32,
        ));
    }

    pub fn draw_background<C: Canvas>(&self, canvas: &mut C) {
        for i in 0..self.field_size.columns() {
            for j in 0..self.field_size.rows() {
                let color = if (i + j) % 2 == 0 { self.colors.even } else { self.colors.odd };
                canvas.fill_rect(self.cell_rect(Cell::new(i, j)), color);
            }
        }
    }

    pub fn draw_food<C, S>(&self, state: &SnakeGameState, canvas: &mut C, sprites: &S)
    where
        C: Canvas,
        S: SpriteCache<Sprite = C::Sprite>,
    {
        if let Some(food) = state.food() {
            self.draw_sprite_at(canvas, sprites, SpriteId::Apple, food);
        }
    }

    /// Head, then tail, then every body segment from tail to head.
    pub fn draw_snake<C, S>(&self, state: &SnakeGameState, canvas: &mut C, sprites: &S) -> Result<(), SnakeError>
    where
        C: Canvas,
        S: SpriteCache<Sprite = C::Sprite>,
    {
        let body = state.body();
        if body.len() < 3 {
            return Err(SnakeError::InvariantViolation(format!(
                "cannot render a snake of {} segments, at least 3 are needed",
                body.len()
            )));
        }

        let field = &self.field_size;
        let head = body[body.len() - 1];
        let tail = body[0];

        self.draw_sprite_at(canvas, sprites, SpriteId::head(state.direction()), head);

        let tail_id = SpriteId::tail(tail_orientation(tail, field.unwrap_neighbor(tail, body[1])));
        self.draw_sprite_at(canvas, sprites, tail_id, tail);

        for i in 1..body.len() - 1 {
            let cell = body[i];
            let before = field.unwrap_neighbor(cell, body[i - 1]);
            let after = field.unwrap_neighbor(cell, body[i + 1]);

            match body_orientation(before, cell, after) {
                Ok(orientation) => self.draw_sprite_at(canvas, sprites, SpriteId::body(orientation), cell),
                Err(err) => {
                    log!("Skipping segment {}: {}", cell, err);
                    if cfg!(debug_assertions) {
                        panic!("{}", err);
                    }
                }
            }
        }

        Ok(())
    }

    fn draw_sprite_at<C, S>(&self, canvas: &mut C, sprites: &S, id: SpriteId, cell: Cell)
    where
        C: Canvas,
        S: SpriteCache<Sprite = C::Sprite>,
    {
        if let Some(sprite) = sprites.lookup(id) {
            canvas.draw_sprite(sprite, self.cell_rect(cell));
        }
    }

    fn cell_rect(&self, cell: Cell) -> PixelRect {
        let piece = self.field_size.piece_size as f32;
        PixelRect::new(cell.column as f32 * piece, cell.row as f32 * piece, piece, piece)
    }
}
