//! Application configuration.
//!
//! Values come from three layers, later ones winning:
//! built-in defaults, an optional TOML file, then `TICTACTOE_*` environment
//! variables (a `.env` file is loaded by the binary before this runs).

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tictactoe_core::Difficulty;
use tracing::{debug, info, instrument, warn};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Environment variable overriding [`AppConfig::board_path`].
pub const ENV_BOARD_PATH: &str = "TICTACTOE_BOARD_PATH";
/// Environment variable overriding [`AppConfig::difficulty_path`].
pub const ENV_DIFFICULTY_PATH: &str = "TICTACTOE_DIFFICULTY_PATH";
/// Environment variable overriding [`AppConfig::default_difficulty`].
pub const ENV_DIFFICULTY: &str = "TICTACTOE_DIFFICULTY";

/// Where game state lives and how hard the opponent plays by default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the persisted game record.
    board_path: PathBuf,

    /// Path of the file holding the chosen difficulty tag.
    difficulty_path: PathBuf,

    /// Difficulty used when the difficulty file is missing or empty.
    default_difficulty: Difficulty,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_path: PathBuf::from("board.json"),
            difficulty_path: PathBuf::from("difficulty.txt"),
            default_difficulty: Difficulty::Easy,
        }
    }
}

impl AppConfig {
    /// Loads configuration from an explicit file, the default file if present,
    /// or defaults, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicitly requested file is missing, or
    /// if any config file cannot be read or parsed.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.merge_env();
        info!(
            board_path = %config.board_path.display(),
            difficulty_path = %config.difficulty_path.display(),
            default_difficulty = %config.default_difficulty,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies overrides from the process environment.
    pub fn merge_env(&mut self) {
        self.merge_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, which maps variable names to values.
    ///
    /// Empty values are ignored, as are difficulty tags that do not parse.
    pub fn merge_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(val) = get(ENV_BOARD_PATH) {
            self.board_path = PathBuf::from(val.trim());
        }
        if let Some(val) = get(ENV_DIFFICULTY_PATH) {
            self.difficulty_path = PathBuf::from(val.trim());
        }
        if let Some(val) = get(ENV_DIFFICULTY) {
            match Difficulty::from_str(val.trim()) {
                Ok(difficulty) => self.default_difficulty = difficulty,
                Err(_) => warn!(value = %val, "Ignoring invalid {}", ENV_DIFFICULTY),
            }
        }
    }

    /// Returns a copy with both state files placed under `dir`.
    pub fn rooted_at(&self, dir: impl AsRef<Path>) -> Self {
        Self {
            board_path: dir.as_ref().join(&self.board_path),
            difficulty_path: dir.as_ref().join(&self.difficulty_path),
            default_difficulty: self.default_difficulty,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.board_path(), Path::new("board.json"));
        assert_eq!(config.difficulty_path(), Path::new("difficulty.txt"));
        assert_eq!(*config.default_difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.merge_from(env(&[
            (ENV_BOARD_PATH, "/tmp/game.json"),
            (ENV_DIFFICULTY, "Hard"),
        ]));

        assert_eq!(config.board_path(), Path::new("/tmp/game.json"));
        assert_eq!(config.difficulty_path(), Path::new("difficulty.txt"));
        assert_eq!(*config.default_difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_invalid_env_values_ignored() {
        let mut config = AppConfig::default();
        config.merge_from(env(&[(ENV_DIFFICULTY, "nightmare"), (ENV_BOARD_PATH, "  ")]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(r#"default_difficulty = "medium""#).unwrap();
        assert_eq!(*config.default_difficulty(), Difficulty::Medium);
        assert_eq!(config.board_path(), Path::new("board.json"));
    }

    #[test]
    fn test_rooted_at() {
        let config = AppConfig::default().rooted_at("/srv/game");
        assert_eq!(config.board_path(), Path::new("/srv/game/board.json"));
        assert_eq!(config.difficulty_path(), Path::new("/srv/game/difficulty.txt"));
    }
}
