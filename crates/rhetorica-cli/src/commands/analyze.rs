//! Analyze command - the full video-to-report flow.

use super::load_config;
use crate::locale;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rhetorica_analysis::Analyzer;
use rhetorica_core::{ContextLabel, Locale};
use rhetorica_report::{render_report, ReportContent, ReportOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::runtime::Runtime;
use tracing::debug;

/// Accepted input containers.
const UPLOAD_EXTENSIONS: &[&str] = &["mp4", "mov"];

/// Run the analyze command.
pub fn run(
    video: &Path,
    context: &str,
    language: Option<String>,
    output: Option<PathBuf>,
    model: Option<String>,
) -> Result<()> {
    let config = load_config()?;

    let language = language.unwrap_or_else(|| config.ui.language.clone());
    let locale = Locale::from_str(&language)
        .with_context(|| format!("Unknown language '{}'; expected en or he", language))?;
    let labels = locale::labels(locale);

    let context = ContextLabel::from_str(context).with_context(|| {
        format!(
            "Unknown context '{}'; expected interview, speaking, sales, or general",
            context
        )
    })?;

    // A missing API key fails here, before any video work.
    let mut analyzer = Analyzer::from_config(&config).context("Failed to set up the analyzer")?;
    if let Some(name) = model {
        analyzer = analyzer.with_model(name);
    }

    // The working copy lives exactly as long as this function: the
    // NamedTempFile guard removes it on success and on every early
    // return below.
    let upload = stage_upload(video)?;

    let rt = Runtime::new().context("Failed to create async runtime")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    spinner.set_message(labels.spinner.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = rt.block_on(analyzer.analyze(upload.path(), context, locale));
    spinner.finish_and_clear();

    let outcome = result.context("Analysis failed")?;

    let score_text = format!("{}/100", outcome.analysis.score);
    println!();
    println!("{}", "─".repeat(70));
    println!(
        "{}: {}",
        labels.score_label.green().bold(),
        score_text.bold()
    );
    if outcome.analysis.score_defaulted {
        println!(
            "{}",
            "(the reply carried no score; the default stands in)".dimmed()
        );
    }
    println!(
        "{}: {}",
        labels.purpose.cyan(),
        locale::purpose_name(locale, context)
    );
    println!(
        "{}",
        format!(
            "model: {} | frames: {}",
            outcome.model, outcome.frames_used
        )
        .dimmed()
    );
    println!("{}", "─".repeat(70));
    println!("{}", labels.feedback_header.cyan().bold());
    println!();
    println!("{}", outcome.analysis.feedback);
    println!("{}", "─".repeat(70));

    let report = ReportContent {
        title: labels.report_title.to_string(),
        score_line: format!("{}: {}", labels.score_label, score_text),
        context_line: format!(
            "{}: {}",
            labels.purpose,
            locale::purpose_name(locale, context)
        ),
        feedback: outcome.analysis.feedback.clone(),
        footer: Some(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()),
    };
    let options = ReportOptions {
        direction: locale.direction(),
        font_path: config.report.font_path.as_ref().map(PathBuf::from),
    };

    let pdf = render_report(&report, &options).context("Failed to render the PDF report")?;

    let output_path = output.unwrap_or_else(|| PathBuf::from(&config.report.output_file));
    std::fs::write(&output_path, &pdf)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "{} {}",
        labels.report_saved.green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Copy the input video to a request-scoped temporary file.
///
/// Returned as the open `NamedTempFile` so the copy is removed when the
/// guard drops, whatever happened in between.
fn stage_upload(video: &Path) -> Result<NamedTempFile> {
    let extension = video
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !UPLOAD_EXTENSIONS.contains(&extension.as_str()) {
        bail!(
            "Unsupported video format '{}'; expected one of: {}",
            extension,
            UPLOAD_EXTENSIONS.join(", ")
        );
    }

    if !video.exists() {
        bail!("Video file not found: {}", video.display());
    }

    let upload = tempfile::Builder::new()
        .prefix("rhetorica-upload-")
        .suffix(".mp4")
        .tempfile()
        .context("Failed to create temporary file")?;

    std::fs::copy(video, upload.path())
        .with_context(|| format!("Failed to copy {}", video.display()))?;
    debug!("Staged {} at {:?}", video.display(), upload.path());

    Ok(upload)
}
