use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{GameConfig, SpritesConfig};

pub const DEFAULT_CONFIG_FILE: &str = "snake_canvas_config.yaml";

pub fn get_config_manager(path: &Path) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub sprites: SpritesConfig,
    /// Fixed food placement sequence; a random seed is drawn when absent.
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.sprites.validate()?;
        Ok(())
    }
}
