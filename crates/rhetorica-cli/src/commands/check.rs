//! Check command - verify external tools and the API key.

use super::load_config;
use anyhow::Result;
use colored::Colorize;

/// Run the check command.
pub fn run() -> Result<()> {
    let config = load_config()?;

    println!("{}", "External tools:".cyan().bold());
    let mut all_ok = true;
    for (tool, available) in rhetorica_media::check_dependencies() {
        if available {
            println!("  {} {}", "✓".green(), tool);
        } else {
            println!("  {} {} (install ffmpeg to get both)", "✗".red(), tool);
            all_ok = false;
        }
    }

    println!();
    println!("{}", "API key:".cyan().bold());
    match config.gemini.resolve_api_key() {
        Ok(_) => println!("  {} Gemini API key resolves", "✓".green()),
        Err(e) => {
            println!("  {} {}", "✗".red(), e);
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("{}", "Ready to analyze.".green().bold());
    } else {
        println!("{}", "Fix the items above before running an analysis.".yellow());
    }

    Ok(())
}
