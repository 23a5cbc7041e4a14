//! Configuration management for the taskdeck application.
//!
//! Settings live in a JSON file inside the platform-specific application data
//! directory. A missing file is not an error: every field has a default, so
//! the application runs without any setup and `taskdeck init` only has to be
//! used to point it at another service or tune the output.
//!
//! ## Fields
//!
//! - **api_url**: Root of the JSONPlaceholder-style service
//! - **timeout_secs**: Per-request HTTP timeout
//! - **use_cache**: Whether fetched responses are cached for the session
//! - **list_limit**: Maximum number of tasks printed per listing
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskdeck::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.list_limit = 20;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Service root baked in at build time.
pub fn default_api_url() -> String {
    APP_METADATA_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_use_cache() -> bool {
    true
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

/// Main configuration container.
///
/// Fields missing from the file take their defaults, so older or hand-written
/// files keep working when new settings are added.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_use_cache")]
    pub use_cache: bool,

    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            use_cache: true,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl Config {
    /// Reads the configuration from the application data directory.
    ///
    /// ## File Location
    ///
    /// - **Windows**: `%LOCALAPPDATA%\taskdeck\taskdeck\config.json`
    /// - **macOS**: `~/Library/Application Support/taskdeck/taskdeck/config.json`
    /// - **Linux**: `~/.local/share/taskdeck/taskdeck/config.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit path, falling back to defaults
    /// when the file does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes pretty-printed JSON to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    ///
    /// # Errors
    ///
    /// Returns an error if user input cannot be collected.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleApi);
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(current.api_url)
            .interact_text()?;

        let timeout_secs: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeout.to_string())
            .default(current.timeout_secs)
            .interact_text()?;

        let use_cache = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUseCache.to_string())
            .default(current.use_cache)
            .interact()?;

        msg_print!(Message::ConfigModuleView);
        let list_limit: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptListLimit.to_string())
            .default(current.list_limit)
            .interact_text()?;

        Ok(Config {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            timeout_secs,
            use_cache,
            list_limit,
        })
    }
}
