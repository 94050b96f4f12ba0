use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::algorithms::{Algorithm, SortOptions, DEFAULT_BUCKET_WIDTH};
use crate::board::{ArrayGenerator, DEFAULT_ARRAY_LEN, DEFAULT_VALUE_RANGE};
use crate::engine::Speed;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Algorithm selected at startup: "bubble_sort", "selection_sort", "insertion_sort",
    /// "merge_sort", "quick_sort", "radix_sort", "bucket_sort"
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Speed preset: "slow" (128ms), "medium" (32ms), "fast" (8ms)
    #[serde(default)]
    pub speed: Speed,
    /// Number of bars in a generated array
    #[serde(default = "default_array_len")]
    pub array_len: usize,
    /// Smallest generated value (inclusive)
    #[serde(default = "default_min_value")]
    pub min_value: u32,
    /// Largest generated value (exclusive)
    #[serde(default = "default_max_value")]
    pub max_value: u32,
    /// Distinct values covered by one bucket in bucket sort
    #[serde(default = "default_bucket_width")]
    pub bucket_width: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            speed: Speed::default(),
            array_len: default_array_len(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            bucket_width: default_bucket_width(),
        }
    }
}

impl EngineConfig {
    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.min_value >= self.max_value {
            return Err(crate::Error::Config(format!(
                "engine.min_value ({}) must be smaller than engine.max_value ({})",
                self.min_value, self.max_value
            )));
        }
        if self.bucket_width == 0 {
            return Err(crate::Error::Config(
                "engine.bucket_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn generator(&self) -> ArrayGenerator {
        ArrayGenerator::new(self.array_len, self.min_value..self.max_value)
    }

    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            bucket_width: self.bucket_width,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds (frame interval while idle)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Print each bar's value under it when there is room
    #[serde(default)]
    pub show_values: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_values: false,
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-j>" (Ctrl+j), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Start sorting the current array
    #[serde(default = "default_key_start")]
    pub start: String,
    /// Pause or resume the current run
    #[serde(default = "default_key_pause_resume")]
    pub pause_resume: String,
    /// Cancel any run and generate a new array
    #[serde(default = "default_key_reset")]
    pub reset: String,
    /// Select the next algorithm
    #[serde(default = "default_key_next_algorithm")]
    pub next_algorithm: String,
    /// Select the previous algorithm
    #[serde(default = "default_key_prev_algorithm")]
    pub prev_algorithm: String,
    #[serde(default = "default_key_speed_slow")]
    pub speed_slow: String,
    #[serde(default = "default_key_speed_medium")]
    pub speed_medium: String,
    #[serde(default = "default_key_speed_fast")]
    pub speed_fast: String,
    /// Cycle slow -> medium -> fast
    #[serde(default = "default_key_cycle_speed")]
    pub cycle_speed: String,
    /// Show the algorithm help popup
    #[serde(default = "default_key_help")]
    pub help: String,
    /// Generate a larger array
    #[serde(default = "default_key_grow_array")]
    pub grow_array: String,
    /// Generate a smaller array
    #[serde(default = "default_key_shrink_array")]
    pub shrink_array: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            start: default_key_start(),
            pause_resume: default_key_pause_resume(),
            reset: default_key_reset(),
            next_algorithm: default_key_next_algorithm(),
            prev_algorithm: default_key_prev_algorithm(),
            speed_slow: default_key_speed_slow(),
            speed_medium: default_key_speed_medium(),
            speed_fast: default_key_speed_fast(),
            cycle_speed: default_key_cycle_speed(),
            help: default_key_help(),
            grow_array: default_key_grow_array(),
            shrink_array: default_key_shrink_array(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_start() -> String { "<CR>".to_string() }
fn default_key_pause_resume() -> String { "<Space>".to_string() }
fn default_key_reset() -> String { "r".to_string() }
fn default_key_next_algorithm() -> String { "l".to_string() }
fn default_key_prev_algorithm() -> String { "h".to_string() }
fn default_key_speed_slow() -> String { "1".to_string() }
fn default_key_speed_medium() -> String { "2".to_string() }
fn default_key_speed_fast() -> String { "3".to_string() }
fn default_key_cycle_speed() -> String { "s".to_string() }
fn default_key_help() -> String { "?".to_string() }
fn default_key_grow_array() -> String { "+".to_string() }
fn default_key_shrink_array() -> String { "-".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sortviz")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_array_len() -> usize {
    DEFAULT_ARRAY_LEN
}

fn default_min_value() -> u32 {
    DEFAULT_VALUE_RANGE.start
}

fn default_max_value() -> u32 {
    DEFAULT_VALUE_RANGE.end
}

fn default_bucket_width() -> u32 {
    DEFAULT_BUCKET_WIDTH
}

fn default_tick_rate() -> u64 {
    33 // ~30fps redraw
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/sortviz/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("sortviz")
            .join("config.toml")
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("sortviz.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
