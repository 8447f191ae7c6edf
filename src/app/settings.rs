use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::font::{FontState, MAX_FONT_SIZE};

/// Startup settings. Read once at launch and never written back, so font
/// changes made from the menu last only for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    #[serde(default)]
    pub font: FontState,

    /// flexi_logger spec string, e.g. "info" or "debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_window_width() -> i32 {
    600
}

fn default_window_height() -> i32 {
    400
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            font: FontState::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let settings = match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            // No file is the normal case
            Err(_) => Self::default(),
        };
        settings.sanitized()
    }

    /// Parse the JSON settings text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Replace out-of-range values with their defaults.
    fn sanitized(mut self) -> Self {
        if self.window_width <= 0 || self.window_height <= 0 {
            log::warn!(
                "Ignoring window size {}x{}",
                self.window_width,
                self.window_height
            );
            self.window_width = default_window_width();
            self.window_height = default_window_height();
        }
        if !(1..=MAX_FONT_SIZE).contains(&self.font.size) {
            log::warn!("Ignoring font size {}", self.font.size);
            self.font.size = FontState::default().size;
        }
        if self.font.family.trim().is_empty() {
            self.font.family = FontState::default().family;
        }
        self
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("advanced-notepad");
        path.push("settings.json");
        path
    }
}
