//! Rhetorica Analysis - The video-to-feedback pipeline.
//!
//! Ties the pieces together: sample frames from the video, pick a
//! model, send the fixed prompt plus frames, and parse the score and
//! feedback out of the reply.

mod analyzer;
mod error;
mod parser;
mod prompt;

pub use analyzer::{AnalysisOutcome, Analyzer};
pub use error::{AnalysisError, AnalysisResult};
pub use parser::{parse_response, DEFAULT_SCORE};
pub use prompt::build_prompt;
