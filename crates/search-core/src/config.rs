//! Configuration for the browser step.
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults
//! 2. `config.toml` in the platform config directory, or the file named by
//!    `SEARCH_CONFIG`
//! 3. Environment variables: `SEARCH_BROWSER`, `SEARCH_GUI`
//! 4. Command-line flags (`--browser`, `--gui`), applied by the caller
//!
//! ## Example Configuration File
//!
//! ```toml
//! browser = "lynx"
//! gui = false
//! opener = "firefox"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::browser::BrowserSettings;
use crate::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SEARCH_CONFIG";
/// Environment variable overriding the terminal browser.
pub const BROWSER_ENV: &str = "SEARCH_BROWSER";
/// Environment variable forcing the GUI opener.
pub const GUI_ENV: &str = "SEARCH_GUI";

const DEFAULT_TERMINAL_BROWSER: &str = "w3m";

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Terminal browser used for web searches when installed.
    pub browser: String,
    /// Always open web searches with the GUI opener.
    pub gui: bool,
    /// Program used instead of the platform's URL opener.
    pub opener: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: DEFAULT_TERMINAL_BROWSER.to_string(),
            gui: false,
            opener: None,
        }
    }
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| env::var(key).ok()))
    }

    /// Load `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `SEARCH_BROWSER` and `SEARCH_GUI` as returned by `lookup`.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(browser) = lookup(BROWSER_ENV).filter(|b| !b.trim().is_empty()) {
            self.browser = browser;
        }
        if let Some(gui) = lookup(GUI_ENV) {
            self.gui = is_truthy(&gui);
        }
        self
    }

    /// Merge command-line flags on top of this config.
    pub fn browser_settings(&self, gui_flag: bool, browser_flag: Option<&str>) -> BrowserSettings {
        BrowserSettings {
            gui: gui_flag || self.gui,
            terminal: browser_flag.unwrap_or(&self.browser).to_string(),
            opener: self.opener.clone(),
        }
    }

    /// Where the config file lives: `SEARCH_CONFIG`, else the platform config dir.
    ///
    /// - Linux: `~/.config/search/config.toml`
    /// - macOS: `~/Library/Application Support/search/config.toml`
    /// - Windows: `%APPDATA%\search\config\config.toml`
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("", "", "search")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
