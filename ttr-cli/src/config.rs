//! ttr configuration loading from `.ttrrc.toml`.
//!
//! The file is looked up in the working directory first, then in the user
//! configuration directory (`<config_dir>/ttr/config.toml`). Configuration is
//! optional: defaults are used when neither file exists.
//!
//! # Example Configuration
//!
//! ```toml
//! [board]
//! path = "boards/usa.json"
//! strict_colors = false
//!
//! [output]
//! format = "table"
//! color = true
//! compact = false
//!
//! [game]
//! seed = 42
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the per-directory configuration file.
pub const CONFIG_FILE: &str = ".ttrrc.toml";

/// Root configuration structure.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct TtrConfig {
    /// Which board to load and how strictly.
    #[serde(default)]
    pub board: BoardSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Ticket drawing.
    #[serde(default)]
    pub game: GameSettings,
}

#[derive(Debug, Deserialize, Default)]
pub struct BoardSettings {
    /// Board file used when `--board` is not given. Relative paths are
    /// resolved against the directory holding the config file.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Fail on unknown route colours instead of mapping them to gray.
    #[serde(default)]
    pub strict_colors: bool,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `table`, `json`, `csv`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Auto-detected from the TTY when unset.
    #[serde(default)]
    pub color: Option<bool>,

    /// Single-line JSON and borderless tables.
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct GameSettings {
    /// Default RNG seed for `ttr ticket`.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TtrConfig {
    /// Load configuration for the given working directory.
    ///
    /// If the config file can't be read or parsed, returns defaults.
    /// Errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let user_config = dirs::config_dir().map(|dir| dir.join("ttr").join("config.toml"));
        let candidates = std::iter::once(root.join(CONFIG_FILE)).chain(user_config);

        for config_path in candidates {
            if config_path.exists() {
                return Self::load_file(&config_path).unwrap_or_default();
            }
        }
        Self::default()
    }

    fn load_file(config_path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", config_path.display(), e);
                return None;
            }
        };
        match toml::from_str::<TtrConfig>(&content) {
            Ok(mut config) => {
                tracing::debug!("Loaded config from {}", config_path.display());
                if let (Some(path), Some(dir)) = (&config.board.path, config_path.parent()) {
                    if path.is_relative() {
                        config.board.path = Some(dir.join(path));
                    }
                }
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                None
            }
        }
    }

    /// Board file to load, if configured.
    pub fn board_path(&self) -> Option<&Path> {
        self.board.path.as_deref()
    }

    pub fn strict_colors(&self) -> bool {
        self.board.strict_colors
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    pub fn compact(&self) -> bool {
        self.output.compact
    }

    pub fn seed(&self) -> Option<u64> {
        self.game.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TtrConfig::default();
        assert!(config.board_path().is_none());
        assert!(!config.strict_colors());
        assert!(config.default_format().is_none());
        assert!(!config.compact());
        assert!(config.seed().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[board]
path = "boards/usa.json"
strict_colors = true

[output]
format = "json"
color = false
compact = true

[game]
seed = 42
"#;
        let config: TtrConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.board_path(), Some(Path::new("boards/usa.json")));
        assert!(config.strict_colors());
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
        assert!(config.compact());
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_load_resolves_relative_board_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[board]\npath = \"usa.json\"\n",
        )
        .unwrap();

        let config = TtrConfig::load(dir.path());
        assert_eq!(config.board_path(), Some(dir.path().join("usa.json").as_path()));
    }

    #[test]
    fn test_load_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[board\npath = ").unwrap();

        let config = TtrConfig::load(dir.path());
        assert!(config.board_path().is_none());
    }
}
