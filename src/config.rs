//! Runtime configuration, loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SIZE;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical canvas size in pixels.
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Target frame budget for the driver.
    pub frame_ms: u64,
    pub enemy_spawn_interval_ms: u64,
    pub power_up_spawn_interval_ms: u64,
    pub power_up_lifetime_ms: u64,
    /// Where log output goes; stderr shares the game screen.
    pub log_file: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            frame_ms: 16,
            enemy_spawn_interval_ms: 2000,
            power_up_spawn_interval_ms: 10_000,
            power_up_lifetime_ms: 10_000,
            log_file: "survival_shooter.log".to_string(),
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML file.  Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config as TOML, e.g. to seed a file with the defaults.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width >= PLAYER_SIZE && self.canvas_height >= PLAYER_SIZE) {
            return Err(ConfigError::Invalid(format!(
                "canvas {}x{} is smaller than the player ({PLAYER_SIZE})",
                self.canvas_width, self.canvas_height
            )));
        }
        let intervals = [
            ("frame_ms", self.frame_ms),
            ("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms),
            ("power_up_spawn_interval_ms", self.power_up_spawn_interval_ms),
            ("power_up_lifetime_ms", self.power_up_lifetime_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}
