use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SpritesConfig {
    /// Directory holding `head_left.png`, `body_topleft.png`, `apple.png`, ...
    pub directory: String,
}

impl Validate for SpritesConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.is_empty() {
            return Err("sprites directory must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SpritesConfig {
    fn default() -> Self {
        Self {
            directory: "Graphics".to_string(),
        }
    }
}
