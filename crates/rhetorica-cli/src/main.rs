//! Rhetorica CLI - AI body-language analysis reports from short videos.

mod commands;
mod locale;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rhetorica - AI body-language analysis reports from short videos
#[derive(Parser)]
#[command(name = "rhetorica")]
#[command(version)]
#[command(about = "AI body-language analysis reports from short videos", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Rhetorica (create the config file)
    Init,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Check that external tools and the API key are in place
    Check,

    /// List the provider's available models and the one selection would pick
    Models,

    /// Analyze a video and produce a PDF report
    Analyze {
        /// Path to the video file (MP4 or MOV)
        video: PathBuf,

        /// Purpose of the video: interview, speaking, sales, or general
        #[arg(short, long, default_value = "general")]
        context: String,

        /// Output language: en or he (default: from config)
        #[arg(short, long)]
        language: Option<String>,

        /// Where to write the PDF report (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use this model instead of querying the provider's list
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rhetorica=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rhetorica=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(),
        },
        Commands::Check => commands::check::run(),
        Commands::Models => commands::models::run(),
        Commands::Analyze {
            video,
            context,
            language,
            output,
            model,
        } => commands::analyze::run(&video, &context, language, output, model),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
