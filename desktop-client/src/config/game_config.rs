use common::config::Validate;
use common::games::snake::{
    BackgroundColors, SnakeSessionSettings, DEFAULT_HEIGHT, DEFAULT_PIECE_SIZE,
    DEFAULT_TICK_INTERVAL_MS, DEFAULT_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub piece_size: u32,
    pub tick_interval_ms: u32,
    pub background: BackgroundColors,
}

impl GameConfig {
    pub fn to_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            width: self.width,
            height: self.height,
            piece_size: self.piece_size,
            tick_interval: Duration::from_millis(u64::from(self.tick_interval_ms)),
            background: self.background,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            piece_size: DEFAULT_PIECE_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            background: BackgroundColors::default(),
        }
    }
}
