// SPDX-License-Identifier: MPL-2.0
//! This module handles the language preference, loading and saving it to a
//! `settings.toml` file under the platform configuration directory.
//!
//! # Examples
//!
//! ```no_run
//! use innlingo::config::{self, Config};
//!
//! // Load the saved preference (or defaults when there is none)
//! let mut config = config::load().unwrap_or_default();
//!
//! // Switch the preferred language and persist it
//! config.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Innlingo";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred locale code, e.g. `"en"` or `"fr"`. `None` defers to the
    /// OS locale and then the built-in default.
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
