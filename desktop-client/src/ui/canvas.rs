use common::games::snake::{Canvas, PixelRect, Rgb};

/// Draws onto an egui painter, offset to where the board was allocated.
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    clear_color: egui::Color32,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2, clear_color: egui::Color32) -> Self {
        Self {
            painter,
            origin,
            clear_color,
        }
    }

    fn to_screen(&self, rect: PixelRect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(rect.x, rect.y),
            egui::vec2(rect.width, rect.height),
        )
    }
}

impl Canvas for PainterCanvas<'_> {
    type Sprite = egui::TextureHandle;

    fn clear_rect(&mut self, rect: PixelRect) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, self.clear_color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.painter.rect_filled(
            self.to_screen(rect),
            0.0,
            egui::Color32::from_rgb(color.r, color.g, color.b),
        );
    }

    fn draw_sprite(&mut self, sprite: &egui::TextureHandle, rect: PixelRect) {
        self.painter.image(
            sprite.id(),
            self.to_screen(rect),
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}
