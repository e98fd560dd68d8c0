use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Validate;
use super::types::{FieldSize, Rgb};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_PIECE_SIZE: u32 = 30;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 300;

pub const MIN_COLUMNS: u32 = 8;
pub const MIN_ROWS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub even: Rgb,
    pub odd: Rgb,
}

impl Default for BackgroundColors {
    fn default() -> Self {
        Self {
            even: Rgb::new(0x16, 0x65, 0x34),
            odd: Rgb::new(0x22, 0xc5, 0x5e),
        }
    }
}

/// Construction parameters of one game; fixed for its whole lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub width: u32,
    pub height: u32,
    pub piece_size: u32,
    pub tick_interval: Duration,
    pub background: BackgroundColors,
}

impl SnakeSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.width, self.height, self.piece_size)
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            piece_size: DEFAULT_PIECE_SIZE,
            tick_interval: Duration::from_millis(u64::from(DEFAULT_TICK_INTERVAL_MS)),
            background: BackgroundColors::default(),
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.piece_size < 4 || self.piece_size > 256 {
            return Err("piece_size must be between 4 and 256".to_string());
        }
        if self.width % self.piece_size != 0 || self.height % self.piece_size != 0 {
            return Err("width and height must be multiples of piece_size".to_string());
        }
        let columns = self.width / self.piece_size;
        let rows = self.height / self.piece_size;
        if columns < MIN_COLUMNS || rows < MIN_ROWS {
            return Err(format!(
                "field must be at least {}x{} cells, got {}x{}",
                MIN_COLUMNS, MIN_ROWS, columns, rows
            ));
        }
        if columns > 200 || rows > 200 {
            return Err("field must not exceed 200x200 cells".to_string());
        }
        let tick_ms = self.tick_interval.as_millis();
        if !(50..=5000).contains(&tick_ms) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}
