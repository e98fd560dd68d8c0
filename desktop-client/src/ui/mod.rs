mod canvas;
mod snake_app;
mod tick_timer;

pub use snake_app::SnakeApp;
