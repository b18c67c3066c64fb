//! CLI command implementations.

pub mod analyze;
pub mod check;
pub mod config;
pub mod init;
pub mod models;

use anyhow::{Context, Result};
use rhetorica_config::{AppPaths, Config};

/// Get the application paths.
pub fn get_paths() -> Result<AppPaths> {
    AppPaths::new().context("Failed to determine application directories")
}

/// Load the configuration and apply display settings.
pub fn load_config() -> Result<Config> {
    let config = Config::load().context("Failed to load configuration")?;

    if !config.ui.color {
        colored::control::set_override(false);
    }

    Ok(config)
}
