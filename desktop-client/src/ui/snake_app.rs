use common::games::SessionRng;
use common::games::snake::{
    Direction, GameEndReason, SnakeGameState, SnakeRenderer, SnakeSessionSettings, TickOutcome,
};
use common::log;
use egui::{Event, Key};
use std::time::Instant;

use crate::sprites::{SpriteStore, TextureCache};
use super::canvas::PainterCanvas;
use super::tick_timer::TickTimer;

pub fn direction_for_key(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowUp => Some(Direction::Up),
        Key::ArrowDown => Some(Direction::Down),
        Key::ArrowLeft => Some(Direction::Left),
        Key::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Arrow presses of this frame, in the order they arrived.
fn pressed_directions(events: &[Event]) -> Vec<Direction> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key { key, pressed: true, .. } => direction_for_key(*key),
            _ => None,
        })
        .collect()
}

fn overlay_text(reason: GameEndReason) -> &'static str {
    match reason {
        GameEndReason::SelfCollision => "GAME OVER",
        GameEndReason::BoardFilled => "YOU WIN",
    }
}

pub struct SnakeApp {
    state: SnakeGameState,
    renderer: SnakeRenderer,
    settings: SnakeSessionSettings,
    sprite_store: SpriteStore,
    textures: TextureCache,
    timer: TickTimer,
}

impl SnakeApp {
    pub fn new(settings: SnakeSessionSettings, rng: SessionRng, sprite_store: SpriteStore) -> Self {
        let field_size = settings.field_size();
        Self {
            state: SnakeGameState::new(field_size, rng),
            renderer: SnakeRenderer::new(field_size, settings.background),
            timer: TickTimer::new(settings.tick_interval),
            settings,
            sprite_store,
            textures: TextureCache::default(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (pressed, restart) = ctx.input(|i| {
            (pressed_directions(&i.events), i.key_pressed(Key::Enter))
        });

        for direction in pressed {
            self.state.set_direction(direction);
        }

        if restart && self.state.is_over() {
            self.state.reset();
            self.timer.restart();
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(self.settings.width as f32, self.settings.height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let mut canvas = PainterCanvas::new(&painter, response.rect.min, ui.visuals().panel_fill);

        // Hold the snake still until the loader has tried every sprite.
        if self.sprite_store.is_finished() && self.timer.poll(Instant::now()) {
            let outcome = self.renderer.repaint(&mut self.state, &mut canvas, &self.textures);
            match outcome {
                TickOutcome::Ate => log!("Snake ate food. Score: {}", self.state.score()),
                TickOutcome::Ended(reason) => {
                    log!("Round finished ({:?}) with score {}", reason, self.state.score())
                }
                TickOutcome::Moved | TickOutcome::Skipped => {}
            }
        } else {
            self.renderer.draw_frame(&self.state, &mut canvas, &self.textures);
        }

        if let Some(reason) = self.state.game_end_reason() {
            painter.rect_filled(response.rect, 0.0, egui::Color32::from_black_alpha(102));
            painter.text(
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                overlay_text(reason),
                egui::FontId::proportional(32.0),
                egui::Color32::WHITE,
            );
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.textures.upload_ready(ctx, &self.sprite_store);
        self.handle_input(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_board(ui);

            ui.add_space(8.0);
            ui.label(format!("Snake move position: {}", self.state.direction()));
            ui.label(format!("Score so far: {}", self.state.score()));
            if self.state.is_over() {
                ui.label("Press Enter to play again");
            }
        });

        ctx.request_repaint_after(self.timer.time_until_next(Instant::now()));
    }
}
