//! Config command - inspect the current configuration.

use super::get_paths;
use anyhow::Result;
use colored::Colorize;
use rhetorica_config::Config;

/// Show the active configuration.
pub fn show() -> Result<()> {
    let paths = get_paths()?;

    if paths.config_file.exists() {
        println!(
            "{} {}",
            "Config file:".cyan().bold(),
            paths.config_file.display()
        );
        println!();
        println!("{}", std::fs::read_to_string(&paths.config_file)?);
    } else {
        println!(
            "{} no config file at {}; built-in defaults apply. Run 'rhetorica init' to create one.",
            "Note:".yellow(),
            paths.config_file.display()
        );
        println!();
        println!("{}", Config::default_config_string());
    }

    Ok(())
}
