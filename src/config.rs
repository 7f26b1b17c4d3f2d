use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::ui::ViewConfig;

/// The recorded game replayed when no other moves are given.
pub const SAMPLE_GAME: [&str; 8] = [
    "A_Red", "B_Yellow", "A_Red", "B_Yellow", "A_Red", "B_Yellow", "G_Red", "B_Yellow",
];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Move tokens such as `C_Red`, replayed in order. Not checked here; a
    /// malformed token is reported when the game is resolved.
    pub moves: Vec<String>,
    pub view: ViewConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            moves: SAMPLE_GAME.iter().map(|s| s.to_string()).collect(),
            view: ViewConfig::default(),
        }
    }
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
        let view = &self.view;
        if view.red_symbol.is_whitespace() {
            return Err(ConfigError::Validation(
                "view.red_symbol must not be whitespace".into(),
            ));
        }
        if view.yellow_symbol.is_whitespace() {
            return Err(ConfigError::Validation(
                "view.yellow_symbol must not be whitespace".into(),
            ));
        }
        if view.red_symbol == view.yellow_symbol {
            return Err(ConfigError::Validation(
                "view.red_symbol and view.yellow_symbol must differ".into(),
            ));
        }
        if view.empty_symbol == view.red_symbol || view.empty_symbol == view.yellow_symbol {
            return Err(ConfigError::Validation(
                "view.empty_symbol must differ from both player symbols".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
