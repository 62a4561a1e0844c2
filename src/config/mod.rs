//! # Configuration
//!
//! Facility Black reads an optional TOML file (default `facility-black.toml`).
//! Every section has defaults, so an empty file or no file at all is fine.
//!
//! ```toml
//! [display]
//! slow_print = true
//! char_delay_ms = 30
//! map_char_delay_ms = 10
//! line_pause_ms = 200
//!
//! [game]
//! # seed = 1234
//! show_intro = true
//!
//! [logging]
//! level = "warn"
//! file = "facility-black.log"
//! ```
//!
//! Precedence: CLI flags > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

pub const DEFAULT_CONFIG_PATH: &str = "facility-black.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Suspense printing. Only applied when stdout is a terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_slow_print")]
    pub slow_print: bool,
    #[serde(default = "default_char_delay_ms")]
    pub char_delay_ms: u64,
    #[serde(default = "default_map_char_delay_ms")]
    pub map_char_delay_ms: u64,
    #[serde(default = "default_line_pause_ms")]
    pub line_pause_ms: u64,
}

fn default_slow_print() -> bool {
    true
}

fn default_char_delay_ms() -> u64 {
    30
}

fn default_map_char_delay_ms() -> u64 {
    10
}

fn default_line_pause_ms() -> u64 {
    200
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            slow_print: default_slow_print(),
            char_delay_ms: default_char_delay_ms(),
            map_char_delay_ms: default_map_char_delay_ms(),
            line_pause_ms: default_line_pause_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed seed for the random source; omitted means a fresh run every time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_show_intro")]
    pub show_intro: bool,
}

fn default_show_intro() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            show_intro: default_show_intro(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, log records go only to this file so they never interleave
    /// with game text. An empty string logs to stderr instead.
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> Option<String> {
    Some("facility-black.log".to_string())
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    /// Log file path, if file logging is on.
    pub fn file_path(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.trim().is_empty())
    }

    /// Parse the configured level; unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!("Invalid log level '{}', defaulting to warn", self.level);
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::parse(path, &content)
    }

    /// Like [`Config::load`], but a file that does not exist is `Ok(None)`.
    /// Unreadable or malformed files are still errors.
    pub fn load_optional(path: &str) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path, e)),
        }
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
