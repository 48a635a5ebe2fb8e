use std::path::Path;

use log::warn;

use crate::ai::{EvaluatorKind, SearchConfig};
use crate::error::ConfigError;
use crate::game::STANDARD_SIZE;
use crate::logging::LoggingConfig;

/// `[game]` table: board geometry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: STANDARD_SIZE,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.game.size;
        if size < 4 || size % 2 != 0 {
            return Err(ConfigError::Validation("game.size must be even and >= 4".into()));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if !(0.0..=1.0).contains(&self.search.epsilon) {
            return Err(ConfigError::Validation("search.epsilon must be in [0, 1]".into()));
        }
        // only the hybrid evaluator reads the threshold
        if self.search.evaluator == EvaluatorKind::Hybrid
            && self.search.hybrid_threshold > size * size
        {
            return Err(ConfigError::Validation(format!(
                "search.hybrid_threshold must be <= {} for a {size}x{size} board",
                size * size
            )));
        }
        if let Err(e) = self.logging.parse_level() {
            return Err(ConfigError::Validation(format!(
                "logging.level is not a valid log specification: {e}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
