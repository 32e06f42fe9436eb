//! Game Configuration
//!
//! Every fixed constant of the two screens (grid size, cell size, fleet
//! layout, window and menu geometry, font path) lives in one immutable
//! [`GameConfig`] that is handed to each component at construction.
//!
//! The defaults reproduce the classic 10x10 board with a 2-3-3-4-5 fleet.
//! A JSON file can override any subset of the fields:
//!
//! ```json
//! {
//!     "cell_size": 40,
//!     "collision_policy": "unchecked"
//! }
//! ```

use crate::placement::CollisionPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Project-local config file, checked first
pub const LOCAL_CONFIG_PATH: &str = "assets/config/battleship.json";

/// Errors that can occur while loading a config file
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    IoError(std::io::Error),

    /// File is not valid JSON for a `GameConfig`
    ParseError(serde_json::Error),

    /// File parsed but describes an unusable setup
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

/// Immutable settings shared by the menu and placement screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells along each side of the square grid
    pub grid_size: u32,

    /// Size of one grid cell in pixels
    pub cell_size: u32,

    /// Ship lengths, in fleet order
    pub fleet: Vec<u32>,

    /// Whether placement moves are tested against the other ships
    pub collision_policy: CollisionPolicy,

    /// TTF font used for all text
    pub font_path: PathBuf,

    /// Menu window width in pixels
    pub window_width: u32,

    /// Menu window height in pixels
    pub window_height: u32,

    /// Menu frame width in pixels
    pub menu_width: u32,

    /// Menu frame height in pixels
    pub menu_height: u32,

    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: 10,
            cell_size: 50,
            fleet: vec![2, 3, 3, 4, 5],
            collision_policy: CollisionPolicy::Checked,
            font_path: PathBuf::from("assets/fonts/SEA.ttf"),
            window_width: 1200,
            window_height: 800,
            menu_width: 600,
            menu_height: 400,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads and validates a config from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the first config file found, or the defaults
    ///
    /// Lookup order:
    /// 1. `assets/config/battleship.json` (next to the binary's working dir)
    /// 2. `<user config dir>/battleship/config.json`
    ///
    /// A file that exists but cannot be used is reported and skipped in
    /// favour of the defaults; the screens never refuse to start over config.
    pub fn load_or_default() -> Self {
        for path in Self::candidate_paths() {
            if !path.exists() {
                continue;
            }

            return match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config {}: {}", path.display(), e);
                    GameConfig::default()
                }
            };
        }

        log::debug!("No config file found, using defaults");
        GameConfig::default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("battleship").join("config.json"));
        }
        paths
    }

    /// Rejects setups the screens cannot draw or play
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be positive".to_string()));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".to_string()));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::Invalid("fleet must contain at least one ship".to_string()));
        }
        if let Some(index) = self.fleet.iter().position(|&length| length == 0) {
            return Err(ConfigError::Invalid(format!("ship {} has zero length", index)));
        }
        if Self::fits_i32(&[self.grid_size, self.cell_size, 2]).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} cells of {}px do not fit the placement window",
                self.grid_size, self.cell_size
            )));
        }
        if let Some(index) = self
            .fleet
            .iter()
            .position(|&length| Self::fits_i32(&[length, self.cell_size]).is_none())
        {
            return Err(ConfigError::Invalid(format!("ship {} is too long", index)));
        }
        if self.menu_width > self.window_width || self.menu_height > self.window_height {
            return Err(ConfigError::Invalid(format!(
                "menu {}x{} does not fit window {}x{}",
                self.menu_width, self.menu_height, self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Product of `factors`, if it stays within `i32` screen coordinates
    fn fits_i32(factors: &[u32]) -> Option<u32> {
        factors
            .iter()
            .try_fold(1u32, |product, &factor| product.checked_mul(factor))
            .filter(|&product| product <= i32::MAX as u32)
    }

    /// Grid side length in pixels
    pub fn grid_pixels(&self) -> u32 {
        self.grid_size * self.cell_size
    }

    /// Placement window: the grid on the left, an equally wide side panel on the right
    pub fn placement_window_size(&self) -> (u32, u32) {
        (self.grid_pixels() * 2, self.grid_pixels())
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config.grid_size, 10);
        assert_eq!(config.cell_size, 50);
        assert_eq!(config.fleet, vec![2, 3, 3, 4, 5]);
        assert_eq!(config.collision_policy, CollisionPolicy::Checked);
        assert_eq!(config.placement_window_size(), (1000, 500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "cell_size": 40, "collision_policy": "unchecked" }"#)
                .unwrap();

        assert_eq!(config.cell_size, 40);
        assert_eq!(config.collision_policy, CollisionPolicy::Unchecked);
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.fleet, vec![2, 3, 3, 4, 5]);
    }

    #[test]
    fn test_validate_rejects_bad_fleet() {
        let empty = GameConfig {
            fleet: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::Invalid(_))));

        let zero_length = GameConfig {
            fleet: vec![2, 0, 3],
            ..Default::default()
        };
        assert!(matches!(zero_length.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_menu() {
        let config = GameConfig {
            menu_width: 1300,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_grid() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_size": 100000, "cell_size": 100000 }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        // Fits u32 but not i32 once doubled for the side panel
        let config = GameConfig {
            grid_size: 1,
            cell_size: 1_200_000_000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            grid_size: 10,
            cell_size: 100_000_000,
            fleet: vec![2, 30],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_accepts_large_but_drawable_grid() {
        let config = GameConfig {
            grid_size: 20,
            cell_size: 80,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.placement_window_size(), (3200, 1600));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let result = GameConfig::load_from_file("does/not/exist/battleship.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_log_level_filter_falls_back_to_info() {
        let config = GameConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);

        let config = GameConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_config_error_converts_to_string() {
        let message: String = ConfigError::Invalid("grid_size must be positive".to_string()).into();
        assert_eq!(message, "Invalid config: grid_size must be positive");
    }
}
