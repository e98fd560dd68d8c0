mod error;
mod game_state;
mod geometry;
mod orientation;
mod render;
mod settings;
mod sprite_id;
mod types;

pub use error::SnakeError;
pub use game_state::{
    find_duplicate_cell, SnakeGameState, TickOutcome, INITIAL_BODY, INITIAL_DIRECTION, INITIAL_FOOD,
};
pub use geometry::{cells_equal, sample_free_cell, wrap_if_out_of_bounds};
pub use orientation::{
    body_orientation, neighbor_direction, tail_orientation, BodyOrientation, NeighborDirection,
    TailOrientation,
};
pub use render::{Canvas, PixelRect, SnakeRenderer, SpriteCache};
pub use settings::{
    BackgroundColors, SnakeSessionSettings, DEFAULT_HEIGHT, DEFAULT_PIECE_SIZE,
    DEFAULT_TICK_INTERVAL_MS, DEFAULT_WIDTH,
};
pub use sprite_id::SpriteId;
pub use types::{Cell, Direction, FieldSize, GameEndReason, GameStatus, Rgb};
