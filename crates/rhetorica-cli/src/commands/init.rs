//! Init command - write the default config file.

use super::get_paths;
use anyhow::{Context, Result};
use colored::Colorize;
use rhetorica_config::{Config, API_KEY_ENV};

/// Run the init command.
pub fn run() -> Result<()> {
    let paths = get_paths()?;
    paths.ensure_dirs().context("Failed to create directories")?;

    if paths.config_file.exists() {
        println!(
            "{} config already exists at {}",
            "Note:".yellow(),
            paths.config_file.display()
        );
        return Ok(());
    }

    Config::create_default_file(&paths.config_file).context("Failed to write config file")?;

    println!(
        "{} {}",
        "Created".green().bold(),
        paths.config_file.display()
    );
    println!();
    println!(
        "Set gemini.api_key in that file, or export {}, then run 'rhetorica check'.",
        API_KEY_ENV
    );

    Ok(())
}
