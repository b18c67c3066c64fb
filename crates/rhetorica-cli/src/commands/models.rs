//! Models command - show the provider's model list and what selection
//! would pick.

use super::load_config;
use anyhow::{Context, Result};
use colored::Colorize;
use rhetorica_gemini::{choose_model, GeminiClient};
use tokio::runtime::Runtime;

/// Run the models command.
pub fn run() -> Result<()> {
    let config = load_config()?;
    let client =
        GeminiClient::from_config(&config.gemini).context("Failed to create Gemini client")?;

    let rt = Runtime::new().context("Failed to create async runtime")?;

    match rt.block_on(client.list_models()) {
        Ok(models) => {
            println!("{}", "Available models:".cyan().bold());
            for model in &models {
                if model.supports_generation() {
                    println!("  {} {}", model.name.green(), model.display_name.dimmed());
                } else {
                    println!(
                        "  {} {}",
                        model.name.dimmed(),
                        "(no content generation)".dimmed()
                    );
                }
            }
            println!();

            match choose_model(&models, &config.gemini.preferred_models) {
                Some(choice) => {
                    println!("{} {}", "Would use:".cyan().bold(), choice);
                }
                None => {
                    println!(
                        "{} no listed model supports generation; the fallback {} would be used",
                        "Note:".yellow(),
                        config.gemini.fallback_model
                    );
                }
            }
        }
        Err(e) => {
            println!("{} model listing failed: {}", "Note:".yellow(), e);
            println!(
                "{} {} (fallback, provider not consulted)",
                "Would use:".cyan().bold(),
                config.gemini.fallback_model
            );
        }
    }

    Ok(())
}
