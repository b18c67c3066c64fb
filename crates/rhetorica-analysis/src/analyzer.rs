//! The orchestrating analyzer: frames in, parsed feedback out.

use crate::error::{AnalysisError, AnalysisResult};
use crate::parser::parse_response;
use crate::prompt::build_prompt;
use rhetorica_config::{Config, GeminiConfig};
use rhetorica_core::{Analysis, ContextLabel, Locale};
use rhetorica_gemini::{select_model, GeminiClient, ModelChoice};
use rhetorica_media::sample_frames;
use std::path::Path;
use tracing::{info, warn};

/// Runs the full analysis pipeline for one video.
pub struct Analyzer {
    client: GeminiClient,
    gemini: GeminiConfig,
    frame_count: usize,
    model_override: Option<String>,
}

/// What one run of the pipeline produced.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Parsed score and feedback.
    pub analysis: Analysis,
    /// How the model name was chosen.
    pub model: ModelChoice,
    /// How many frames were actually submitted.
    pub frames_used: usize,
    /// The unmodified response text.
    pub raw_response: String,
}

impl Analyzer {
    /// Create an analyzer from configuration.
    pub fn from_config(config: &Config) -> AnalysisResult<Self> {
        let client = GeminiClient::from_config(&config.gemini)?;

        Ok(Self {
            client,
            gemini: config.gemini.clone(),
            frame_count: config.analysis.frame_count,
            model_override: None,
        })
    }

    /// Skip model selection and use this model name as-is.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_override = Some(model.into());
        self
    }

    /// Analyze one video: sample frames, select a model, submit the
    /// prompt, parse the reply. Remote failures propagate; a partially
    /// readable video does not.
    pub async fn analyze(
        &self,
        video: &Path,
        context: ContextLabel,
        locale: Locale,
    ) -> AnalysisResult<AnalysisOutcome> {
        info!("Analyzing {:?} (context: {}, language: {})", video, context, locale);

        let frames = sample_frames(video, self.frame_count)?;
        if frames.is_empty() {
            return Err(AnalysisError::NoFrames);
        }
        info!("Submitting {} frames", frames.len());

        let model = match &self.model_override {
            Some(name) => ModelChoice::Pinned(name.clone()),
            None => select_model(&self.client, &self.gemini).await,
        };
        if model.is_fallback() {
            warn!("Proceeding with unverified fallback model {}", model.name());
        }

        let prompt = build_prompt(context, locale);
        let jpeg_frames: Vec<Vec<u8>> = frames.into_iter().map(|f| f.data).collect();
        let frames_used = jpeg_frames.len();

        let raw_response = self
            .client
            .generate_content(model.name(), &prompt, &jpeg_frames)
            .await?;

        let analysis = parse_response(&raw_response);
        info!(
            "Analysis complete: score {}{}",
            analysis.score,
            if analysis.score_defaulted { " (defaulted)" } else { "" }
        );

        Ok(AnalysisOutcome {
            analysis,
            model,
            frames_used,
            raw_response,
        })
    }
}
