//! Error types for the analysis pipeline.

use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while analyzing a video.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Media error: {0}")]
    Media(#[from] rhetorica_media::MediaError),

    #[error("Gemini error: {0}")]
    Gemini(#[from] rhetorica_gemini::GeminiError),

    #[error("Config error: {0}")]
    Config(#[from] rhetorica_config::ConfigError),

    #[error("No frames could be sampled from the video")]
    NoFrames,
}
