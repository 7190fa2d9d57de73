//! Configuration management for Corpus.
//!
//! Configuration is read from `~/.config/corpus/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::store::DEFAULT_SAMPLE_COUNT;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
    pub store: StoreConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Document store settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Upper bound for a single store call, in seconds.
    pub timeout_secs: u64,
    /// Populate an empty store with sample articles before launching the TUI.
    pub seed_on_empty: bool,
    pub sample_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            seed_on_empty: true,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// List and header layout settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Name shown in the header. Defaults to `$USER`.
    pub username: String,
    /// Width of a list row; narrower terminals shrink it.
    pub row_width: u16,
    /// Words kept in each list excerpt.
    pub excerpt_words: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            username: std::env::var("USER").unwrap_or_else(|_| "reader".to_string()),
            row_width: 80,
            excerpt_words: 12,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/corpus/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("corpus").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ConfigError::Io { path, source }
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let mut file = fs::File::create(path).map_err(io_err(path))?;
        file.write_all(Self::default_config_content().as_bytes())
            .map_err(io_err(path))?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# Corpus Configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "?"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[colors]
header_fg = "White"
header_bg = "#7c3aed"
selected_item = "White"
unselected_item = "DarkGray"
author = "Yellow"
footer = "DarkGray"
error = "LightRed"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
page_up = ["PageUp", "b"]
page_down = ["PageDown", "Space"]
top = ["g", "Home"]
bottom = ["G", "End"]
select = ["Enter"]
back = ["Esc", "Backspace"]
refresh = ["R"]
filter_author = ["a"]
help = ["?"]

[store]
# Seconds a single database call may wait before failing
timeout_secs = 5

# Fill an empty database with sample articles on launch
seed_on_empty = true
sample_count = 10

[ui]
# Name shown in the header (defaults to $USER)
# username = "reader"

# Width of a list row; narrower terminals shrink it
row_width = 80

# Words shown in each list excerpt
excerpt_words = 12

[log]
# Used when RUST_LOG is unset; TUI logs go to the data directory
level = "warn"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config = toml::from_str(Config::default_config_content())
            .expect("Default config should be valid TOML");

        assert_eq!(
            config.colors.header_bg,
            ratatui::style::Color::Rgb(0x7c, 0x3a, 0xed)
        );
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
        assert_eq!(config.store.timeout_secs, 5);
        assert_eq!(config.ui.row_width, 80);
        assert_eq!(config.ui.excerpt_words, 12);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[colors]
author = "#FF0000"

[store]
timeout_secs = 2
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.colors.author, ratatui::style::Color::Rgb(255, 0, 0));
        assert_eq!(config.colors.footer, ratatui::style::Color::DarkGray);
        assert_eq!(config.store.timeout(), Duration::from_secs(2));
        assert!(config.store.seed_on_empty);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.keybindings.back, vec!["Esc", "Backspace"]);
        assert_eq!(config.store.sample_count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let content = "[colors]\nauthor = \"not-a-color\"\n";
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.ui.row_width, 80);

        // Second load parses the file that was just written.
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.keybindings.help, vec!["?"]);
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\nrow_width = ").unwrap();

        match Config::load_from(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }
}
